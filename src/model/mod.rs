//! Domain model for the slice of Notion this tool reads and writes:
//! pages and their typed property values.

mod page;
mod property_value;

pub use page::Page;
pub use property_value::{
    DateValue, FormulaValue, PropertyTypeValue, PropertyValue, RelationRef, RichText, RollupValue,
    SelectOption, User,
};
