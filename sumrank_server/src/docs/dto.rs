use crate::{info, summarize};
use sumrank_core::helpers::dto::{SummarizeRequest, SummarizeResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(info::handler::info, summarize::handler::summarize,),
    components(schemas(info::dto::Info, SummarizeRequest, SummarizeResponse))
)]
pub struct ApiDoc;
