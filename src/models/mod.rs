pub mod advocates;
pub mod new_advocate;

pub use advocates::AdvocateRow;
pub use new_advocate::NewAdvocate;
