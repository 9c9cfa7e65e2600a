use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct HeroDoc { pub id: i64, pub name: String }

#[derive(ToSchema)]
pub struct HeroInputDoc { pub name: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::heroes::list,
        crate::routes::heroes::create,
        crate::routes::heroes::get,
        crate::routes::heroes::update,
        crate::routes::heroes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            HeroDoc,
            HeroInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "heroes")
    )
)]
pub struct ApiDoc;
