// tests/support/mocks/repos.rs
use async_trait::async_trait;
use quillpost::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryUpdate, CategoryWriteRepository,
    NewCategory,
};
use quillpost::domain::errors::{DomainError, DomainResult};
use quillpost::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
};
use quillpost::domain::slug::{Slug, SlugAvailability, generate_unique_slug};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/* -------------------------------- Store -------------------------------- */

/// Rows shared by the in-memory post and category repositories, standing in
/// for the three tables.
#[derive(Default)]
pub struct Store {
    pub posts: BTreeMap<i64, Post>,
    pub categories: BTreeMap<i64, Category>,
    /// `(post_id, category_id)` pairs.
    pub links: Vec<(i64, i64)>,
    next_post_id: i64,
    next_category_id: i64,
}

impl Store {
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::default()))
    }

    pub fn put_post(&mut self, post: Post) {
        self.next_post_id = self.next_post_id.max(post.id.0);
        self.posts.insert(post.id.0, post);
    }

    pub fn put_category(&mut self, category: Category) {
        self.next_category_id = self.next_category_id.max(category.id.0);
        self.categories.insert(category.id.0, category);
    }

    pub fn link(&mut self, post_id: i64, category_id: i64) {
        if !self.links.contains(&(post_id, category_id)) {
            self.links.push((post_id, category_id));
        }
    }

    pub fn categories_of(&self, post_id: i64) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .links
            .iter()
            .filter(|(post, _)| *post == post_id)
            .map(|(_, category)| *category)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn check_categories(&self, ids: &[CategoryId]) -> DomainResult<()> {
        if ids.iter().all(|id| self.categories.contains_key(&id.0)) {
            Ok(())
        } else {
            Err(DomainError::NotFound("category not found".into()))
        }
    }
}

/// Slugs already in use, minus the row being renamed.
struct TakenSlugs(HashSet<String>);

impl TakenSlugs {
    fn collect<'a>(slugs: impl Iterator<Item = &'a Slug>) -> Self {
        Self(slugs.map(|slug| slug.as_str().to_string()).collect())
    }
}

#[async_trait]
impl SlugAvailability for TakenSlugs {
    async fn is_available(&mut self, candidate: &Slug) -> DomainResult<bool> {
        Ok(!self.0.contains(candidate.as_str()))
    }
}

/* -------------------------------- Posts -------------------------------- */

#[derive(Clone)]
pub struct InMemoryPostRepo {
    pub store: Arc<Mutex<Store>>,
}

impl InMemoryPostRepo {
    pub fn new(store: Arc<Mutex<Store>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut taken = {
            let store = self.store.lock().unwrap();
            TakenSlugs::collect(store.posts.values().map(|p| &p.slug))
        };
        let slug = generate_unique_slug(&post.base_slug, &mut taken).await?;

        let mut store = self.store.lock().unwrap();
        store.check_categories(&post.category_ids)?;
        store.next_post_id += 1;
        let id = PostId(store.next_post_id);
        let created = Post {
            id,
            title: post.title,
            slug,
            content: post.content,
            description: post.description,
            author: post.author,
            image_url: post.image_url,
            tags: post.tags,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        store.posts.insert(id.0, created.clone());
        for category_id in &post.category_ids {
            store.link(id.0, category_id.0);
        }
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut taken = {
            let store = self.store.lock().unwrap();
            if !store.posts.contains_key(&update.id.0) {
                return Err(DomainError::NotFound("post not found".into()));
            }
            TakenSlugs::collect(
                store
                    .posts
                    .values()
                    .filter(|p| p.id != update.id)
                    .map(|p| &p.slug),
            )
        };
        let slug = match &update.base_slug {
            Some(base) => Some(generate_unique_slug(base, &mut taken).await?),
            None => None,
        };

        let mut store = self.store.lock().unwrap();
        if let Some(ids) = &update.category_ids {
            store.check_categories(ids)?;
        }
        let mut post = store
            .posts
            .get(&update.id.0)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        update.apply_to(&mut post);
        if let Some(slug) = slug {
            post.slug = slug;
        }
        store.posts.insert(post.id.0, post.clone());

        if let Some(ids) = update.category_ids {
            store.links.retain(|(post_id, _)| *post_id != update.id.0);
            for category_id in ids {
                store.link(update.id.0, category_id.0);
            }
        }
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        if store.posts.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("post not found".into()));
        }
        store.links.retain(|(post_id, _)| *post_id != id.0);
        Ok(())
    }
}

fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.store.lock().unwrap().posts.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let store = self.store.lock().unwrap();
        Ok(store.posts.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        let store = self.store.lock().unwrap();
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        newest_first(&mut posts);
        Ok(posts
            .into_iter()
            .skip(usize::try_from(offset).unwrap())
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        let store = self.store.lock().unwrap();
        Ok(store.posts.values().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn post_ids_in_category(&self, category_id: CategoryId) -> DomainResult<Vec<PostId>> {
        let store = self.store.lock().unwrap();
        let mut ids: Vec<PostId> = store
            .links
            .iter()
            .filter(|(_, category)| *category == category_id.0)
            .map(|(post, _)| PostId(*post))
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn categories_for_post(&self, id: PostId) -> DomainResult<Vec<Category>> {
        let store = self.store.lock().unwrap();
        let mut categories: Vec<Category> = store
            .categories_of(id.0)
            .into_iter()
            .filter_map(|category_id| store.categories.get(&category_id).cloned())
            .collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

/// Read repository that counts every call, to prove a query never reached
/// storage.
pub struct CountingPostRead {
    pub inner: InMemoryPostRepo,
    pub calls: AtomicUsize,
}

impl CountingPostRead {
    pub fn new(inner: InMemoryPostRepo) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostReadRepository for CountingPostRead {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        self.hit();
        self.inner.find_by_slug(slug).await
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        self.hit();
        self.inner.list_page(filter, limit, offset).await
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        self.hit();
        self.inner.count(filter).await
    }

    async fn post_ids_in_category(&self, category_id: CategoryId) -> DomainResult<Vec<PostId>> {
        self.hit();
        self.inner.post_ids_in_category(category_id).await
    }

    async fn categories_for_post(&self, id: PostId) -> DomainResult<Vec<Category>> {
        self.hit();
        self.inner.categories_for_post(id).await
    }
}

/* -------------------------------- Categories -------------------------------- */

#[derive(Clone)]
pub struct InMemoryCategoryRepo {
    pub store: Arc<Mutex<Store>>,
}

impl InMemoryCategoryRepo {
    pub fn new(store: Arc<Mutex<Store>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut taken = {
            let store = self.store.lock().unwrap();
            TakenSlugs::collect(store.categories.values().map(|c| &c.slug))
        };
        let slug = generate_unique_slug(&category.base_slug, &mut taken).await?;

        let mut store = self.store.lock().unwrap();
        store.next_category_id += 1;
        let created = Category {
            id: CategoryId(store.next_category_id),
            name: category.name,
            slug,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        store.categories.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut taken = {
            let store = self.store.lock().unwrap();
            if !store.categories.contains_key(&update.id.0) {
                return Err(DomainError::NotFound("category not found".into()));
            }
            TakenSlugs::collect(
                store
                    .categories
                    .values()
                    .filter(|c| c.id != update.id)
                    .map(|c| &c.slug),
            )
        };
        let slug = match &update.base_slug {
            Some(base) => Some(generate_unique_slug(base, &mut taken).await?),
            None => None,
        };

        let mut store = self.store.lock().unwrap();
        let mut category = store
            .categories
            .get(&update.id.0)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        update.apply_to(&mut category);
        if let Some(slug) = slug {
            category.slug = slug;
        }
        store.categories.insert(category.id.0, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut store = self.store.lock().unwrap();
        if store.categories.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("category not found".into()));
        }
        store.links.retain(|(_, category_id)| *category_id != id.0);
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepo {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.store.lock().unwrap().categories.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let store = self.store.lock().unwrap();
        Ok(store.categories.values().find(|c| &c.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let store = self.store.lock().unwrap();
        let mut categories: Vec<Category> = store.categories.values().cloned().collect();
        categories.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(categories)
    }
}
