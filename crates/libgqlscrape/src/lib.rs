pub mod execution;
pub mod introspection;
mod named_ref;
pub mod operation;
pub mod schema;
pub mod session;
pub mod sink;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;
mod value;
mod value_synthesizer;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
pub use value_synthesizer::ID_PLACEHOLDER;
pub use value_synthesizer::STRING_PLACEHOLDER;
pub use value_synthesizer::SynthesizedValue;
pub use value_synthesizer::ValueSynthesizer;
