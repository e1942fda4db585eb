use tokio::sync::RwLock;

use crate::entity::posts;

/// Repository for post operations. Lookups are linear scans.
#[derive(Default)]
pub struct PostRepository {
    posts: RwLock<Vec<posts::Model>>,
}

impl PostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a post and returns the stored copy
    pub async fn insert(&self, post: posts::Model) -> posts::Model {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        post
    }

    /// Get all posts in insertion order
    pub async fn get_all(&self) -> Vec<posts::Model> {
        self.posts.read().await.clone()
    }

    /// Get a post by id
    pub async fn get_by_id(&self, id: &str) -> Option<posts::Model> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Find posts written by an author, ignoring address case
    pub async fn find_by_author(&self, author: &str) -> Vec<posts::Model> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|p| p.author.eq_ignore_ascii_case(author))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::posts::NewPost;

    fn post(author: &str, title: &str) -> posts::Model {
        posts::Model::from_new(NewPost {
            title: title.to_string(),
            content: "body".to_string(),
            author: author.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_insert_and_get_by_id() {
        let repo = PostRepository::new();
        let stored = repo.insert(post("0xabc", "First")).await;

        assert_eq!(repo.get_by_id(&stored.id).await, Some(stored));
        assert_eq!(repo.get_by_id("missing").await, None);
        assert_eq!(repo.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let repo = PostRepository::new();
        for title in ["a", "b", "c"] {
            repo.insert(post("0xabc", title)).await;
        }

        let titles: Vec<String> = repo.get_all().await.into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_by_author_ignores_case() {
        let repo = PostRepository::new();
        repo.insert(post("0xAbCd", "mine")).await;
        repo.insert(post("0xffff", "theirs")).await;

        let found = repo.find_by_author("0xabcd").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "mine");
    }
}
