pub mod field;
pub mod provider;
pub mod validate;
pub mod view;

pub use field::{FieldControl, FieldDescriptor, FieldOption, FieldOptions, OptionsFn};
pub use provider::{HelpLink, ItemEntry, ModalConfig, ProviderConfig, SelectorEntry};
pub use validate::{check_integrity, validate_credentials, CredentialsError, SchemaError};
pub use view::{FieldView, HelpLinkView, ItemView, ModalView, ProviderView, SelectorView};
