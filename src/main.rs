//! # User Console Demo
//!
//! Drives every screen once against the in-memory directory:
//! 1.  List the first page and sort it.
//! 2.  Submit a broken create form, fix it, and submit again.
//! 3.  Edit the new user and print the change summary.
//! 4.  Delete the user and confirm it is gone.
//!
//! Run with `RUST_LOG=info cargo run`.

use user_console::avatar::RandomIndex;
use user_console::clients::UserApi;
use user_console::config::ConsoleConfig;
use user_console::lifecycle::tracing::setup_tracing;
use user_console::lifecycle::ConsoleSystem;
use user_console::model::UserField;
use user_console::validation::ImageFile;
use user_console::views::{
    CreateUserForm, EditUserForm, SortKey, UserDetailView, UserForm, UserListView,
};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ConsoleConfig::from_env().map_err(|e| e.to_string())?;
    info!(theme = %config.theme, page_size = config.page_size, "Starting user console");

    let system = ConsoleSystem::new(&config);
    let api = &system.client;

    // Listing
    let span = tracing::info_span!("list_screen");
    async {
        let mut list = UserListView::load(api, 1).await.map_err(|e| e.to_string())?;
        list.sort_by(SortKey::LastName);
        let sort = list.sort();
        for user in list.users() {
            info!(id = %user.id, name = %user.full_name(), "Row");
        }
        let nav = list.nav();
        info!(
            page = nav.current,
            total = nav.total,
            sorted_by = ?sort.key,
            order = sort.order.arrow(),
            "Listing shown"
        );
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Create: first attempt is rejected locally
    let span = tracing::info_span!("create_screen");
    let created = async {
        let mut form = CreateUserForm::new(system.pool.clone());
        form.set_field(UserField::FirstName, "Al");
        form.set_field(UserField::Email, "al-at-example");

        let mut form = match form.submit(api).await {
            Ok(_) => return Err("Broken form was accepted".to_string()),
            Err(rejected) => {
                for (field, message) in rejected.view.errors().iter() {
                    warn!(%field, reason = message, "Field rejected");
                }
                rejected.into_view()
            }
        };

        form.set_field(UserField::FirstName, "Alma");
        form.set_field(UserField::LastName, "Reyes");
        form.set_field(UserField::Email, "alma.reyes@example.com");
        let photo = ImageFile::new("alma.png", "image/png", 120 * 1024);
        if !form.choose_image(photo, &mut RandomIndex::from_os()) {
            warn!(
                reason = form.errors().get(UserField::Avatar).unwrap_or_default(),
                "Image rejected, keeping current avatar"
            );
        }

        info!("Submitting new user");
        let outcome = form.submit(api).await.map_err(|e| e.to_string())?;
        info!(
            id = %outcome.user.id,
            avatar = outcome.display_avatar(),
            redirect = %outcome.redirect.to,
            "User created"
        );
        Ok::<_, String>(outcome.user)
    }
    .instrument(span)
    .await?;

    // Edit
    let span = tracing::info_span!("edit_screen");
    async {
        let mut form = EditUserForm::load(api, created.id, system.pool.clone())
            .await
            .map_err(|e| e.to_string())?;
        form.set_field(UserField::LastName, "Reyes Ortiz");
        form.set_avatar_url("https://example.com/alma.jpg");

        let outcome = form.submit(api).await.map_err(|e| e.to_string())?;
        for line in &outcome.summary {
            info!("{line}");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Detail and delete
    let span = tracing::info_span!("detail_screen");
    async {
        let view = UserDetailView::load(api, created.id)
            .await
            .map_err(|e| e.to_string())?;
        info!(name = %view.user().full_name(), edit = %view.edit_route(), "Showing user");

        match view.delete(api).await {
            Ok(redirect) => info!(to = %redirect.to, after = ?redirect.after, "Deleted"),
            Err(rejected) => error!(error = %rejected, "Delete failed"),
        }

        match api.get(created.id).await {
            Err(e) if e.is_not_found() => info!(id = %created.id, "User is gone"),
            other => warn!(?other, "User still present"),
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Console demo completed successfully");
    Ok(())
}
