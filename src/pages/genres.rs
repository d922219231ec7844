//! Genre page handlers
//!
//! Every mutating workflow is the same two-state machine: a form state
//! (GET, or POST with validation errors re-rendering the submitted values)
//! and a committed state (successful POST mutating the store, then
//! redirecting to the record's detail URL or the list).

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    error::AppResult,
    models::GenreForm,
    services::{CreateGenreOutcome, DeleteGenreOutcome},
    views, AppState,
};

/// Display list of all genres
pub async fn genre_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let genres = state.services.genres.list().await?;
    let mut ctx = views::page("Genre List");
    ctx.insert("genre_list", &genres);
    views::render("genre_list.html", &ctx)
}

/// Display detail page for a genre and the books referencing it
pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let (genre, books) = state.services.genres.detail(id).await?;
    let mut ctx = views::page("Genre Detail");
    ctx.insert("genre", &genre);
    ctx.insert("genre_books", &books);
    views::render("genre_detail.html", &ctx)
}

/// Display genre create form
pub async fn genre_create_get() -> AppResult<Html<String>> {
    let mut ctx = views::page("Create Genre");
    ctx.insert("genre", &GenreForm::default());
    ctx.insert("errors", &Vec::<String>::new());
    views::render("genre_form.html", &ctx)
}

/// Handle genre create on POST
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let (name, errors) = form.validate(1, "Genre name required");
    if !errors.is_empty() {
        let mut ctx = views::page("Create Genre");
        ctx.insert("genre", &GenreForm { name });
        ctx.insert("errors", &errors.messages());
        return Ok(views::render("genre_form.html", &ctx)?.into_response());
    }

    // A duplicate name redirects to the existing record instead of inserting
    let genre = match state.services.genres.create(&name).await? {
        CreateGenreOutcome::Created(genre) => genre,
        CreateGenreOutcome::AlreadyExists(genre) => genre,
    };
    Ok(Redirect::to(&genre.url()).into_response())
}

/// Display genre delete confirmation, listing any blocking books
pub async fn genre_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let (genre, books) = state.services.genres.detail(id).await?;
    let mut ctx = views::page("Delete Genre");
    ctx.insert("genre", &genre);
    ctx.insert("genre_books", &books);
    views::render("genre_delete.html", &ctx)
}

/// Handle genre delete on POST
pub async fn genre_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.genres.delete(id).await? {
        DeleteGenreOutcome::Deleted => Ok(Redirect::to("/catalog/genres").into_response()),
        DeleteGenreOutcome::Blocked { genre, books } => {
            let mut ctx = views::page("Delete Genre");
            ctx.insert("genre", &genre);
            ctx.insert("genre_books", &books);
            Ok(views::render("genre_delete.html", &ctx)?.into_response())
        }
    }
}

/// Display genre update form
pub async fn genre_update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let genre = state.services.genres.find(id).await?;
    let mut ctx = views::page("Update Genre");
    ctx.insert("genre", &genre);
    ctx.insert("errors", &Vec::<String>::new());
    views::render("genre_form.html", &ctx)
}

/// Handle genre update on POST
pub async fn genre_update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<GenreForm>,
) -> AppResult<Response> {
    let (name, errors) = form.validate(3, "Genre name must contain at least 3 characters");
    if !errors.is_empty() {
        let mut ctx = views::page("Update Genre");
        ctx.insert("genre", &GenreForm { name });
        ctx.insert("errors", &errors.messages());
        return Ok(views::render("genre_form.html", &ctx)?.into_response());
    }

    let genre = state.services.genres.update(id, &name).await?;
    Ok(Redirect::to(&genre.url()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use tower::ServiceExt;

    use crate::error::AppError;
    use crate::models::{Book, Genre};
    use crate::pages::testing::{body_text, form_request, get_request, router_with};
    use crate::repository::{MockBookInstanceRepository, MockBookRepository, MockGenreRepository};

    fn genre(id: i32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn list_renders_even_when_empty() {
        let mut genres = MockGenreRepository::new();
        genres.expect_list().returning(|| Ok(Vec::new()));
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app.oneshot(get_request("/catalog/genres")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("There are no genres."));
    }

    #[tokio::test]
    async fn create_post_redirects_to_the_new_record() {
        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_name().returning(|_| Ok(None));
        genres
            .expect_create()
            .times(1)
            .returning(|name| Ok(genre(7, name)));
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app
            .oneshot(form_request("/catalog/genre/create", "name=Poetry"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/catalog/genre/7");
    }

    #[tokio::test]
    async fn create_post_redirects_to_an_existing_duplicate() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_name()
            .withf(|name| name == "Fantasy")
            .returning(|_| Ok(Some(genre(3, "Fantasy"))));
        genres.expect_create().times(0);
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app
            .oneshot(form_request("/catalog/genre/create", "name=Fantasy"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/catalog/genre/3");
    }

    #[tokio::test]
    async fn create_post_rerenders_an_empty_name() {
        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_name().times(0);
        genres.expect_create().times(0);
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app
            .oneshot(form_request("/catalog/genre/create", "name=++"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Genre name required"));
    }

    #[tokio::test]
    async fn update_post_rerenders_short_names_without_mutating() {
        let mut genres = MockGenreRepository::new();
        genres.expect_update().times(0);
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app
            .oneshot(form_request("/catalog/genre/3/update", "name=ab"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Genre name must contain at least 3 characters"));
        // the submitted value is not lost
        assert!(html.contains(r#"value="ab""#));
    }

    #[tokio::test]
    async fn update_post_redirects_to_the_record() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_update()
            .withf(|&id, name| id == 3 && name == "Science Fiction")
            .times(1)
            .returning(|id, name| Ok(genre(id, name)));
        let app = router_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let response = app
            .oneshot(form_request(
                "/catalog/genre/3/update",
                "name=Science+Fiction",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/catalog/genre/3");
    }

    #[tokio::test]
    async fn detail_returns_404_for_a_missing_genre() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .returning(|id| Err(AppError::NotFound(format!("Genre {} not found", id))));
        let mut books = MockBookRepository::new();
        books.expect_find_by_genre().returning(|_| Ok(Vec::new()));
        let app = router_with(genres, books, MockBookInstanceRepository::new());

        let response = app.oneshot(get_request("/catalog/genre/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_get_returns_404_for_a_missing_genre() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .returning(|id| Err(AppError::NotFound(format!("Genre {} not found", id))));
        let mut books = MockBookRepository::new();
        books.expect_find_by_genre().returning(|_| Ok(Vec::new()));
        let app = router_with(genres, books, MockBookInstanceRepository::new());

        let response = app
            .oneshot(get_request("/catalog/genre/42/delete"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_post_is_refused_while_books_reference_the_genre() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .returning(|id| Ok(genre(id, "Fantasy")));
        genres.expect_delete().times(0);
        let mut books = MockBookRepository::new();
        books.expect_find_by_genre().returning(|_| {
            Ok(vec![Book {
                id: 1,
                title: "The Hobbit".to_string(),
            }])
        });
        let app = router_with(genres, books, MockBookInstanceRepository::new());

        let response = app
            .oneshot(form_request("/catalog/genre/3/delete", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("The Hobbit"));
        assert!(html.contains("Delete the following books"));
    }

    #[tokio::test]
    async fn delete_post_removes_and_redirects_to_the_list() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .returning(|id| Ok(genre(id, "Fantasy")));
        genres.expect_delete().times(1).returning(|_| Ok(()));
        let mut books = MockBookRepository::new();
        books.expect_find_by_genre().returning(|_| Ok(Vec::new()));
        let app = router_with(genres, books, MockBookInstanceRepository::new());

        let response = app
            .oneshot(form_request("/catalog/genre/3/delete", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/catalog/genres");
    }
}
