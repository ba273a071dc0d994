//! Application services

pub mod sitemap;

pub use sitemap::SitemapService;
