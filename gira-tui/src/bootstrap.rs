use crate::app::{App, View};

/// Load everything the first frame needs from the mock backend.
pub fn initialize_app_state(app: &mut App) {
    app.notifications = app.backend.notifications();
    app.navigate_to(View::Dashboard);
    tracing::info!(
        issues = app.backend.issues().len(),
        projects = app.backend.projects().len(),
        "app state initialized from fixtures"
    );
}
