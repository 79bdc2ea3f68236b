mod list;

pub use list::BriefsTable;
