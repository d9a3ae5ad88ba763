pub mod persona;

pub use persona::PersonaRecord;
