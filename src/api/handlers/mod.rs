pub mod pdf_proxy;
pub mod root;
