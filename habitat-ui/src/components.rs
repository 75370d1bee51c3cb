pub mod chat_stream;
pub mod drawer;
pub mod history_drawer;
pub mod permit_drawer;
pub mod sources_sidebar;
pub mod top_bar;
