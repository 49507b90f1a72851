mod tag;
pub use tag::Tag;

mod tags;
pub use tags::Tags;

mod flag;
pub use flag::Flag;
