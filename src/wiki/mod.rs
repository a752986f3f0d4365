mod client;

pub use client::{NO_CONTENT, PageClient};
