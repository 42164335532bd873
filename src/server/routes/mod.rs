pub mod content;
pub mod hooks;
pub mod leads;
pub mod pages;
pub mod products;
