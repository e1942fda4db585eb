// Repository management

mod post_repository;
mod trade_repository;

pub use post_repository::PostRepository;
pub use trade_repository::TradeRepository;

/// Container for all repositories
#[derive(Default)]
pub struct Repositories {
    pub post: PostRepository,
    pub trade: TradeRepository,
}
