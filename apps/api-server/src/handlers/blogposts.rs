//! `/blogposts` resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_shared::dto::{
    BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Malformed or mistyped JSON bodies become RFC 7807 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// An id that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::NotFound(format!("{} with id {} not found", BlogPost::ENTITY_TYPE, raw))
    })
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
    }
}

/// GET /blogposts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogposts: Vec<BlogPostResponse> = state
        .blog_posts
        .get_all()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        count: blogposts.len(),
        blogposts,
    }))
}

/// GET /blogposts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .blog_posts
        .get_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: BlogPost::ENTITY_TYPE,
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /blogposts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .blog_posts
        .create(NewBlogPost {
            title: req.title,
            author: req.author,
            content: req.content,
        })
        .await?;

    tracing::info!(blog_post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /blogposts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    state
        .blog_posts
        .update(
            id,
            BlogPostChanges {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    tracing::info!(blog_post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogposts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.blog_posts.delete(id).await?;

    tracing::info!(blog_post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
