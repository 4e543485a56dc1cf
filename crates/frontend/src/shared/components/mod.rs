pub mod card;
pub mod pagination_controls;
pub mod stat_card;

pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
