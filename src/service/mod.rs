//! Post Service Module
//!
//! Puts the post cache in front of the post store: reads go through the
//! cache, writes go to the store and then invalidate the cache.

pub mod slugs;

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::{PaginatedPosts, PostCache};
use crate::error::{BlogError, Result};
use crate::models::{CreatePostRequest, Post, UpdatePostRequest};
use crate::repository::PostRepository;

// == Pagination Defaults ==
/// Page served when the requested page is invalid
pub const DEFAULT_PAGE: u32 = 1;
/// Page size served when the requested size is invalid
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page size accepted as-is
pub const MAX_PAGE_SIZE: u32 = 25;

/// Maps an invalid (page, limit) pair to the default first page.
///
/// A page or limit that is not positive, or a limit above [`MAX_PAGE_SIZE`],
/// resets both values rather than clamping them individually.
pub fn normalize_pagination(page: i64, limit: i64) -> (u32, u32) {
    match (u32::try_from(page), u32::try_from(limit)) {
        (Ok(page), Ok(limit)) if page > 0 && limit > 0 && limit <= MAX_PAGE_SIZE => (page, limit),
        _ => (DEFAULT_PAGE, DEFAULT_PAGE_SIZE),
    }
}

/// One page of posts as served, after pagination normalisation.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub page: u32,
    pub limit: u32,
    pub result: Arc<PaginatedPosts>,
}

// == Post Service ==
/// Read-through / write-invalidate access to posts.
#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    cache: PostCache,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>, cache: PostCache) -> Self {
        Self { repository, cache }
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    // == Reads ==
    pub async fn get_post_by_id(&self, id: Uuid) -> Result<Arc<Post>> {
        if let Some(post) = self.cache.get_by_id(id) {
            debug!(%id, "post cache hit");
            return Ok(post);
        }

        let post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BlogError::NotFound(format!("id '{}'", id)))?;

        let post = Arc::new(post);
        self.cache.set_by_id(id, post.clone());
        Ok(post)
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> Result<Arc<Post>> {
        if slug.is_empty() {
            return Err(BlogError::InvalidRequest("Slug is required".to_string()));
        }

        if let Some(post) = self.cache.get_by_slug(slug) {
            debug!(slug, "post cache hit");
            return Ok(post);
        }

        let post = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| BlogError::NotFound(format!("slug '{}'", slug)))?;

        let post = Arc::new(post);
        self.cache.set_by_slug(slug, post.clone());
        Ok(post)
    }

    pub async fn get_all_posts(&self) -> Result<Arc<Vec<Post>>> {
        if let Some(posts) = self.cache.get_all() {
            debug!("post list cache hit");
            return Ok(posts);
        }

        let posts = Arc::new(self.repository.find_all().await?);
        self.cache.set_all(posts.clone());
        Ok(posts)
    }

    /// Returns one page of posts, newest first.
    ///
    /// The page is cached under the normalised (page, limit) pair.
    pub async fn get_paginated_posts(&self, page: i64, limit: i64) -> Result<PostPage> {
        let (page, limit) = normalize_pagination(page, limit);

        if let Some(result) = self.cache.get_paginated(page, limit) {
            debug!(page, limit, "post page cache hit");
            return Ok(PostPage {
                page,
                limit,
                result,
            });
        }

        let offset = u64::from(page - 1) * u64::from(limit);
        let (posts, total) = self.repository.find_page(limit, offset).await?;

        let result = self.cache.set_paginated(page, limit, posts, total);

        Ok(PostPage {
            page,
            limit,
            result,
        })
    }

    // == Writes ==
    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post> {
        if let Some(msg) = req.validate() {
            return Err(BlogError::InvalidRequest(msg));
        }

        let title = req.title.trim();
        let slug = self.generate_unique_slug(title).await?;
        let post = Post::new(title, req.content, slug, req.author_id);

        let post = self.repository.insert(post).await?;
        self.cache.invalidate_lists();

        info!(id = %post.id, slug = %post.slug, "post created");
        Ok(post)
    }

    /// Updates title, content, and counters. The slug never changes.
    pub async fn update_post(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post> {
        if let Some(msg) = req.validate() {
            return Err(BlogError::InvalidRequest(msg));
        }

        let mut post = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| BlogError::NotFound(format!("id '{}'", id)))?;

        post.title = req.title.trim().to_string();
        post.content = req.content;
        post.likes = req.likes;
        post.dislikes = req.dislikes;

        let post = self.repository.update(post).await?;
        self.cache.invalidate_post(id, &post.slug);
        self.cache.invalidate_lists();

        info!(%id, "post updated");
        Ok(post)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<()> {
        // The slug is needed to drop the slug-keyed cache entry afterwards
        let slug = self
            .repository
            .find_by_id(id)
            .await?
            .map(|post| post.slug)
            .unwrap_or_default();

        self.repository.delete(id).await?;
        self.cache.invalidate_post(id, &slug);
        self.cache.invalidate_lists();

        info!(%id, "post deleted");
        Ok(())
    }

    /// Slug for `title` that no stored post uses yet.
    pub async fn generate_unique_slug(&self, title: &str) -> Result<String> {
        let base = slugs::derive_slug(title)?;
        if !self.repository.slug_exists(&base).await? {
            return Ok(base);
        }

        for attempt in 1..=slugs::MAX_SUFFIX_ATTEMPTS {
            let candidate = slugs::suffixed(&base, attempt);
            if !self.repository.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(BlogError::Conflict(format!(
            "exhausted attempts to find a unique slug for '{}'",
            base
        )))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryPostRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Wraps the in-memory store and counts reads that reach it.
    #[derive(Default)]
    struct CountingRepository {
        inner: InMemoryPostRepository,
        reads: AtomicUsize,
    }

    impl CountingRepository {
        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.reads.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PostRepository for CountingRepository {
        async fn insert(&self, post: Post) -> Result<Post> {
            self.inner.insert(post).await
        }
        async fn update(&self, post: Post) -> Result<Post> {
            self.inner.update(post).await
        }
        async fn delete(&self, id: Uuid) -> Result<()> {
            self.inner.delete(id).await
        }
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>> {
            self.hit();
            self.inner.find_by_id(id).await
        }
        async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>> {
            self.hit();
            self.inner.find_by_slug(slug).await
        }
        async fn find_all(&self) -> Result<Vec<Post>> {
            self.hit();
            self.inner.find_all().await
        }
        async fn find_page(&self, limit: u32, offset: u64) -> Result<(Vec<Post>, u64)> {
            self.hit();
            self.inner.find_page(limit, offset).await
        }
        async fn slug_exists(&self, slug: &str) -> Result<bool> {
            self.inner.slug_exists(slug).await
        }
    }

    /// Store whose reads always fail.
    struct BrokenRepository;

    #[async_trait]
    impl PostRepository for BrokenRepository {
        async fn insert(&self, _post: Post) -> Result<Post> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn update(&self, _post: Post) -> Result<Post> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn delete(&self, _id: Uuid) -> Result<()> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn find_by_slug(&self, _slug: &str) -> Result<Option<Post>> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn find_all(&self) -> Result<Vec<Post>> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn find_page(&self, _limit: u32, _offset: u64) -> Result<(Vec<Post>, u64)> {
            Err(BlogError::Internal("store offline".into()))
        }
        async fn slug_exists(&self, _slug: &str) -> Result<bool> {
            Err(BlogError::Internal("store offline".into()))
        }
    }

    fn service() -> (PostService, Arc<CountingRepository>) {
        let repo = Arc::new(CountingRepository::default());
        let service = PostService::new(repo.clone(), PostCache::new(Duration::from_secs(300)));
        (service, repo)
    }

    fn create_request(title: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: "Some content".to_string(),
            author_id: Uuid::new_v4(),
        }
    }

    fn update_request(title: &str) -> UpdatePostRequest {
        UpdatePostRequest {
            title: title.to_string(),
            content: "Edited content".to_string(),
            likes: 3,
            dislikes: 1,
        }
    }

    #[test]
    fn test_normalize_pagination() {
        let max = i64::from(MAX_PAGE_SIZE);
        assert_eq!(normalize_pagination(2, 5), (2, 5));
        assert_eq!(normalize_pagination(3, max), (3, MAX_PAGE_SIZE));
        assert_eq!(normalize_pagination(0, 5), (1, 10));
        assert_eq!(normalize_pagination(4, 0), (1, 10));
        assert_eq!(normalize_pagination(4, max + 1), (1, 10));
    }

    #[test]
    fn test_normalize_pagination_negative_and_oversized() {
        assert_eq!(normalize_pagination(-1, 10), (1, 10));
        assert_eq!(normalize_pagination(2, -5), (1, 10));
        assert_eq!(normalize_pagination(i64::MIN, i64::MIN), (1, 10));
        assert_eq!(normalize_pagination(i64::from(u32::MAX) + 1, 5), (1, 10));
    }

    #[tokio::test]
    async fn test_get_by_id_reads_store_once() {
        let (service, repo) = service();
        let created = service.create_post(create_request("Hello")).await.unwrap();

        let first = service.get_post_by_id(created.id).await.unwrap();
        let second = service.get_post_by_id(created.id).await.unwrap();

        assert_eq!(*first, created);
        assert_eq!(first, second);
        assert_eq!(repo.reads(), 1);
    }

    #[tokio::test]
    async fn test_id_cache_does_not_serve_slug_reads() {
        let (service, repo) = service();
        let created = service.create_post(create_request("Hello")).await.unwrap();

        service.get_post_by_id(created.id).await.unwrap();
        service.get_post_by_slug(&created.slug).await.unwrap();
        service.get_post_by_slug(&created.slug).await.unwrap();

        // One store read per lookup axis
        assert_eq!(repo.reads(), 2);
    }

    #[tokio::test]
    async fn test_missing_post_is_not_cached() {
        let (service, repo) = service();
        let post = Post::new("Late", "Arrives later", "late", Uuid::new_v4());

        let result = service.get_post_by_id(post.id).await;
        assert!(matches!(result, Err(BlogError::NotFound(_))));

        // Stored behind the service's back; the earlier miss must not stick
        repo.inner.insert(post.clone()).await.unwrap();
        assert_eq!(*service.get_post_by_id(post.id).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_cached() {
        let service = PostService::new(
            Arc::new(BrokenRepository),
            PostCache::new(Duration::from_secs(300)),
        );

        assert!(matches!(
            service.get_all_posts().await,
            Err(BlogError::Internal(_))
        ));
        assert!(service.cache().get_all().is_none());
        assert!(service.cache().get_paginated(1, 10).is_none());
    }

    #[tokio::test]
    async fn test_create_invalidates_lists() {
        let (service, repo) = service();
        service.create_post(create_request("First")).await.unwrap();

        assert_eq!(service.get_all_posts().await.unwrap().len(), 1);
        assert_eq!(service.get_paginated_posts(1, 10).await.unwrap().result.total, 1);
        assert_eq!(repo.reads(), 2);

        // Served from cache
        service.get_all_posts().await.unwrap();
        service.get_paginated_posts(1, 10).await.unwrap();
        assert_eq!(repo.reads(), 2);

        service.create_post(create_request("Second")).await.unwrap();

        assert_eq!(service.get_all_posts().await.unwrap().len(), 2);
        let page = service.get_paginated_posts(1, 10).await.unwrap();
        assert_eq!(page.result.total, 2);
        assert_eq!(repo.reads(), 4);
    }

    #[tokio::test]
    async fn test_update_refreshes_cached_post() {
        let (service, _repo) = service();
        let created = service.create_post(create_request("Original")).await.unwrap();
        service.get_post_by_id(created.id).await.unwrap();
        service.get_post_by_slug(&created.slug).await.unwrap();

        let updated = service
            .update_post(created.id, update_request("Renamed"))
            .await
            .unwrap();

        assert_eq!(updated.slug, created.slug, "slug stays stable");
        assert_eq!(service.get_post_by_id(created.id).await.unwrap().title, "Renamed");
        assert_eq!(service.get_post_by_slug(&created.slug).await.unwrap().likes, 3);
    }

    #[tokio::test]
    async fn test_delete_invalidates_everything_for_post() {
        let (service, _repo) = service();
        let created = service.create_post(create_request("Doomed")).await.unwrap();
        service.get_post_by_id(created.id).await.unwrap();
        service.get_post_by_slug(&created.slug).await.unwrap();
        service.get_all_posts().await.unwrap();
        service.get_paginated_posts(1, 10).await.unwrap();

        service.delete_post(created.id).await.unwrap();

        assert!(matches!(
            service.get_post_by_id(created.id).await,
            Err(BlogError::NotFound(_))
        ));
        assert!(matches!(
            service.get_post_by_slug(&created.slug).await,
            Err(BlogError::NotFound(_))
        ));
        assert!(service.get_all_posts().await.unwrap().is_empty());
        assert_eq!(service.get_paginated_posts(1, 10).await.unwrap().result.total, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let (service, _repo) = service();
        assert!(matches!(
            service.delete_post(Uuid::new_v4()).await,
            Err(BlogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unique_slug_suffixes() {
        let (service, _repo) = service();

        let first = service.create_post(create_request("Same Title")).await.unwrap();
        let second = service.create_post(create_request("Same Title")).await.unwrap();
        let third = service.create_post(create_request("Same Title")).await.unwrap();

        assert_eq!(first.slug, "same-title");
        assert_eq!(second.slug, "same-title-1");
        assert_eq!(third.slug, "same-title-2");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let (service, _repo) = service();

        assert!(matches!(
            service.create_post(create_request("x")).await,
            Err(BlogError::InvalidRequest(_))
        ));
        assert!(matches!(
            service.create_post(create_request("??")).await,
            Err(BlogError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_pagination_falls_back_to_defaults() {
        let (service, _repo) = service();
        for i in 0..12 {
            service
                .create_post(create_request(&format!("Post number {i}")))
                .await
                .unwrap();
        }

        let page = service.get_paginated_posts(0, 50).await.unwrap();
        assert_eq!((page.page, page.limit), (DEFAULT_PAGE, DEFAULT_PAGE_SIZE));
        assert_eq!(page.result.posts.len(), 10);
        assert_eq!(page.result.total, 12);

        let page = service.get_paginated_posts(2, 10).await.unwrap();
        assert_eq!(page.result.posts.len(), 2);
    }
}
