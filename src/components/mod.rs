mod content_card;
mod nav_header;

pub use content_card::ContentCard;
pub use nav_header::NavHeader;
