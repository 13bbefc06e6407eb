//! The person upsert flow: names in a text property become People pages
//! related back to the page that named them.

mod directory;
mod linker;
mod names;

pub use directory::{PeopleDirectory, Resolution};
pub use linker::{link_people, LinkStats};
pub use names::split_person_names;
