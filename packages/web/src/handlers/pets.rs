//! Pet listing, detail/edit, and delete handlers.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use paws_api::forms::{error_messages, EditPetForm};
use paws_api::Pet;
use tera::Context;
use validator::Validate;

use super::render;
use crate::error::{AppError, PET_NOT_FOUND};
use crate::state::AppState;

const DUPLICATE_NAME_MESSAGE: &str = "A Pet with this name already exists!";

pub async fn homepage(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let pets = Pet::list(&state.pool).await?;
    let mut context = Context::new();
    context.insert("pets", &pets);
    render(&state, "home.html", &context)
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, "about.html", &Context::new())
}

pub async fn pet_details(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let pet = Pet::find(&state.pool, pet_id)
        .await?
        .ok_or(AppError::NotFound(PET_NOT_FOUND))?;
    let mut context = Context::new();
    context.insert("form", &edit_form(&pet));
    context.insert("pet", &pet);
    render(&state, "details.html", &context)
}

pub async fn edit_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
    Form(form): Form<EditPetForm>,
) -> Result<Html<String>, AppError> {
    let pet = Pet::find(&state.pool, pet_id)
        .await?
        .ok_or(AppError::NotFound(PET_NOT_FOUND))?;

    let mut context = Context::new();
    context.insert("form", &form);

    if let Err(errors) = form.validate() {
        // Stored row in the page header, the rejected input in the form.
        context.insert("pet", &pet);
        context.insert("errors", &error_messages(&errors));
        return render(&state, "details.html", &context);
    }

    match Pet::update(&state.pool, pet_id, &form.name, &form.age, &form.bio).await {
        Ok(updated) => {
            context.insert("form", &edit_form(&updated));
            context.insert("pet", &updated);
            render(&state, "details.html", &context)
        }
        Err(paws_api::Error::NotFound) => Err(AppError::NotFound(PET_NOT_FOUND)),
        Err(err) => {
            // The stored row is untouched; the page shows the attempted
            // values back to the user. Every commit failure gets the
            // duplicate-name message, so log the real one.
            tracing::error!(error = %err, pet_id, "pet update failed, rolled back");
            context.insert("pet", &submitted(&pet, &form));
            context.insert("message", DUPLICATE_NAME_MESSAGE);
            render(&state, "details.html", &context)
        }
    }
}

pub async fn delete_pet(
    State(state): State<AppState>,
    Path(pet_id): Path<i64>,
) -> Result<Redirect, AppError> {
    Pet::find(&state.pool, pet_id)
        .await?
        .ok_or(AppError::NotFound(PET_NOT_FOUND))?;

    // A failed delete is logged and swallowed; the user is redirected home
    // either way.
    if let Err(err) = Pet::delete(&state.pool, pet_id).await {
        tracing::error!(error = %err, pet_id, "pet delete failed, rolled back");
    }
    Ok(Redirect::to("/"))
}

/// An edit form pre-filled from a stored row.
fn edit_form(pet: &Pet) -> EditPetForm {
    EditPetForm {
        name: pet.name.clone(),
        age: pet.age.clone(),
        bio: pet.bio.clone(),
    }
}

/// The submitted form values rendered in place of the stored row.
fn submitted(pet: &Pet, form: &EditPetForm) -> Pet {
    Pet {
        id: pet.id,
        name: form.name.clone(),
        age: form.age.clone(),
        bio: form.bio.clone(),
        posted_by: pet.posted_by,
    }
}
