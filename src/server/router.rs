//! HTTP route table and OpenAPI document.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto},
        inventory::{
            AddCustomizationDto, AddCustomizationSetDto, CustomizationDto, EquipDto,
            GrantResultDto, InventoryDto,
        },
        quest::{QuestDto, UpdateQuestStatusDto, UpdateQuestTextDto, UserQuestDto},
        star::{AddUserStarDto, StarDto},
        user::{
            ForgotPasswordDto, LoginDto, ProfileDto, RegisterDto, ResetPasswordDto,
            UpdateUserDto, UserDto,
        },
    },
    server::{
        controller::{account, health, inventory, quest, star},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Questkeeper API",
        description = "Accounts, cosmetic inventory and quest progress"
    ),
    paths(
        health::health,
        account::register,
        account::login,
        account::verify_email,
        account::forgot_password,
        account::reset_password,
        account::update_user,
        account::delete_user,
        inventory::get_inventory,
        inventory::add_customization,
        inventory::add_customization_set,
        inventory::equip,
        quest::get_quests,
        quest::get_user_quests,
        quest::update_user_quest_text,
        quest::update_user_quest_status,
        quest::update_quest,
        star::get_stars,
        star::add_user_star,
    ),
    components(
        schemas(
            ErrorDto,
            MessageDto,
            HealthDto,
            RegisterDto,
            LoginDto,
            ProfileDto,
            UserDto,
            UpdateUserDto,
            ForgotPasswordDto,
            ResetPasswordDto,
            CustomizationDto,
            InventoryDto,
            AddCustomizationDto,
            AddCustomizationSetDto,
            GrantResultDto,
            EquipDto,
            QuestDto,
            UserQuestDto,
            UpdateQuestTextDto,
            UpdateQuestStatusDto,
            StarDto,
            AddUserStarDto,
        )
    ),
    tags(
        (name = "health", description = "Connectivity check"),
        (name = "account", description = "Registration, login, verification and password management"),
        (name = "inventory", description = "Customization inventory and equipped set"),
        (name = "quest", description = "Quest catalog and per-user progress"),
        (name = "star", description = "Quest completion stars")
    )
)]
pub struct ApiDoc;

/// Builds the API routes.
///
/// Layers (CORS, tracing) and the documentation UI are added by `app`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::health))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/verify-email", get(account::verify_email))
        .route("/forgot-password", post(account::forgot_password))
        .route("/reset-password", post(account::reset_password))
        .route(
            "/user/{id}",
            put(account::update_user).delete(account::delete_user),
        )
        .route("/inventory/equip", put(inventory::equip))
        .route("/inventory/{id}", get(inventory::get_inventory))
        .route("/add-customization", post(inventory::add_customization))
        .route(
            "/add-customization-set",
            post(inventory::add_customization_set),
        )
        .route("/quests", get(quest::get_quests))
        .route("/quests/{id}", put(quest::update_quest))
        .route("/user-quests/{id}", get(quest::get_user_quests))
        .route(
            "/user-quests/{user_id}/{quest_id}",
            put(quest::update_user_quest_text),
        )
        .route(
            "/user-quests-status",
            put(quest::update_user_quest_status),
        )
        .route("/stars/{id}", get(star::get_stars))
        .route("/add-user-star", post(star::add_user_star))
}

/// Complete application: routes with state, Swagger UI at `/docs`, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
