pub mod add;
pub mod export;
pub mod list;
pub mod remove;
pub mod search;
pub mod show;

pub use add::handle_add;
pub use export::handle_export;
pub use list::handle_list;
pub use remove::handle_remove;
pub use search::handle_search;
pub use show::handle_show;
