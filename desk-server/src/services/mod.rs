//! 服务层 - 前台一致性引擎的核心组件
//!
//! 每个服务持有注入的连接池句柄，跨表写入都在同一事务内完成。
//!
//! # 服务列表
//!
//! - [`RoomRegistry`] - 房间与房态
//! - [`GuestLedger`] - 入住 / 退房 / 住客账目
//! - [`FoodOrders`] - 餐饮订单 (住客挂账 + 日营收原子累加)
//! - [`Revenue`] - 收入记录、日营收汇总与对账
//! - [`CleaningCoordinator`] - 客房清洁任务
//! - [`Dashboard`] - 前台总览
//! - [`StaffDirectory`] / [`MenuCatalog`] / [`Reservations`] / [`RoomPriceBook`] - 基础资料

pub mod cleaning;
pub mod dashboard;
pub mod food_orders;
pub mod guest_ledger;
pub mod menu;
pub mod reservations;
pub mod revenue;
pub mod room_prices;
pub mod room_registry;
pub mod staff;

pub use cleaning::CleaningCoordinator;
pub use dashboard::Dashboard;
pub use food_orders::FoodOrders;
pub use guest_ledger::GuestLedger;
pub use menu::MenuCatalog;
pub use reservations::Reservations;
pub use revenue::Revenue;
pub use room_prices::RoomPriceBook;
pub use room_registry::RoomRegistry;
pub use staff::StaffDirectory;
