//! Book copy page handlers

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tera::Context;

use crate::{
    error::AppResult,
    models::{Book, BookInstanceForm, ValidatedBookInstance},
    views, AppState,
};

fn form_context(
    title: &str,
    book_list: &[Book],
    selected_book: Option<i32>,
    form: &BookInstanceForm,
    errors: &[&str],
) -> Context {
    let mut ctx = views::page(title);
    ctx.insert("book_list", book_list);
    ctx.insert("selected_book", &selected_book);
    ctx.insert("bookinstance", form);
    ctx.insert("errors", errors);
    ctx
}

/// Display list of all book copies
pub async fn bookinstance_list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let instances = state.services.book_instances.list().await?;
    let mut ctx = views::page("Book Instance List");
    ctx.insert("bookinstance_list", &instances);
    views::render("bookinstance_list.html", &ctx)
}

/// Display detail page for a book copy
pub async fn bookinstance_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let instance = state.services.book_instances.detail(id).await?;
    let mut ctx = views::page(&format!("Copy: {}", instance.book_title));
    ctx.insert("bookinstance", &instance);
    views::render("bookinstance_detail.html", &ctx)
}

/// Display book copy create form
pub async fn bookinstance_create_get(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.book_instances.book_choices().await?;
    let ctx = form_context(
        "Create BookInstance",
        &books,
        None,
        &BookInstanceForm::default(),
        &[],
    );
    views::render("bookinstance_form.html", &ctx)
}

/// Handle book copy create on POST
pub async fn bookinstance_create_post(
    State(state): State<AppState>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match form.validate() {
        ValidatedBookInstance {
            record: Some(record),
            ..
        } => {
            let instance = state.services.book_instances.create(&record).await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        validated => {
            // Re-fetch the book picker so the form can re-render
            let books = state.services.book_instances.book_choices().await?;
            let ctx = form_context(
                "Create BookInstance",
                &books,
                validated.selected_book,
                &validated.form,
                &validated.errors.messages(),
            );
            Ok(views::render("bookinstance_form.html", &ctx)?.into_response())
        }
    }
}

/// Display book copy delete confirmation
pub async fn bookinstance_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let instance = state.services.book_instances.detail(id).await?;
    let mut ctx = views::page("Delete BookInstance");
    ctx.insert("bookinstance", &instance);
    views::render("bookinstance_delete.html", &ctx)
}

/// Handle book copy delete on POST
pub async fn bookinstance_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.book_instances.delete(id).await?;
    Ok(Redirect::to("/catalog/bookinstances"))
}

/// Display book copy update form
pub async fn bookinstance_update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let (instance, books) = state.services.book_instances.edit_view(id).await?;
    let ctx = form_context(
        "Update BookInstance",
        &books,
        Some(instance.book_id),
        &BookInstanceForm::from(&instance),
        &[],
    );
    views::render("bookinstance_form.html", &ctx)
}

/// Handle book copy update on POST
pub async fn bookinstance_update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match form.validate() {
        ValidatedBookInstance {
            record: Some(record),
            ..
        } => {
            let instance = state.services.book_instances.update(id, &record).await?;
            Ok(Redirect::to(&instance.url()).into_response())
        }
        validated => {
            let books = state.services.book_instances.book_choices().await?;
            let ctx = form_context(
                "Update BookInstance",
                &books,
                validated.selected_book,
                &validated.form,
                &validated.errors.messages(),
            );
            Ok(views::render("bookinstance_form.html", &ctx)?.into_response())
        }
    }
}
