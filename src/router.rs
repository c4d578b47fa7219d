use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{admin, analytics, auth, request, super_admin, word},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        word::get_words,
        word::get_word_by_id,
        word::add_word,
        word::update_word,
        word::delete_word,
        word::search_words,
        word::get_recently_added,
        word::get_word_of_the_day,
        word::get_top_lookups,
        request::submit_request,
        request::submit_change_request,
        admin::get_dashboard,
        admin::get_requests,
        admin::get_request_by_id,
        admin::update_request_status,
        admin::delete_request,
        super_admin::get_dashboard,
        super_admin::get_admins,
        super_admin::delete_admin,
        super_admin::send_invitation,
        super_admin::register_admin,
        super_admin::approve_request,
        analytics::get_user_activity,
        analytics::get_word_analytics,
        analytics::get_request_analytics,
    ),
    info(
        title = "Techlex API",
        description = "Tech-dictionary backend: word catalog, user submissions, and the admin approval workflow"
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/words", get(word::get_words).post(word::add_word))
        .route(
            "/words/{id}",
            get(word::get_word_by_id)
                .put(word::update_word)
                .delete(word::delete_word),
        )
        .route("/api/words/search", get(word::search_words))
        .route("/api/words/recent", get(word::get_recently_added))
        .route("/api/words/word-of-the-day", get(word::get_word_of_the_day))
        .route("/api/words/top-lookups", get(word::get_top_lookups))
        .route("/api/request", post(request::submit_request))
        .route("/api/request/change", post(request::submit_change_request))
        .route("/admin/dashboard", get(admin::get_dashboard))
        .route("/admin/requests", get(admin::get_requests))
        .route(
            "/admin/requests/{id}",
            get(admin::get_request_by_id)
                .put(admin::update_request_status)
                .delete(admin::delete_request),
        )
        .route("/api/superadmin/dashboard", get(super_admin::get_dashboard))
        .route("/api/superadmin/admins", get(super_admin::get_admins))
        .route(
            "/api/superadmin/admins/{id}",
            delete(super_admin::delete_admin),
        )
        .route(
            "/api/superadmin/invitations",
            post(super_admin::send_invitation),
        )
        .route(
            "/api/superadmin/register-admin",
            post(super_admin::register_admin),
        )
        .route(
            "/api/superadmin/user-requests/{request_id}/approve",
            put(super_admin::approve_request),
        )
        .route(
            "/api/analytics/user-activity",
            get(analytics::get_user_activity),
        )
        .route("/api/analytics/words", get(analytics::get_word_analytics))
        .route(
            "/api/analytics/requests",
            get(analytics::get_request_analytics),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
