//! API 路由模块
//!
//! 处理器只做参数提取，每个请求调用一次服务层操作并返回 JSON。
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`rooms`] - 房间与房态
//! - [`stays`] - 入住 / 退房
//! - [`food_orders`] - 餐饮订单
//! - [`menu`] - 菜单
//! - [`revenue`] - 营收报表与对账
//! - [`income`] - 收入记录
//! - [`cleaning`] - 客房清洁 (需调用者身份)
//! - [`staff`] - 员工
//! - [`dashboard`] - 前台总览
//! - [`reservations`] - 预订
//! - [`room_prices`] - 房价

pub mod cleaning;
pub mod dashboard;
pub mod food_orders;
pub mod health;
pub mod income;
pub mod menu;
pub mod reservations;
pub mod revenue;
pub mod room_prices;
pub mod rooms;
pub mod staff;
pub mod stays;

use axum::Router;
use axum::middleware::from_fn;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::middleware::require_identity;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware or state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(rooms::router())
        .merge(stays::router())
        .merge(food_orders::router())
        .merge(menu::router())
        .merge(revenue::router())
        .merge(income::router())
        .merge(cleaning::router())
        .merge(staff::router())
        .merge(dashboard::router())
        .merge(reservations::router())
        .merge(room_prices::router())
}

/// Fully configured application: routes, state and tower-http middleware
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // Caller identity for every mutating /api request
        .layer(from_fn(require_identity))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
