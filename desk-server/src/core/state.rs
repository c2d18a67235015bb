use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::{
    CleaningCoordinator, Dashboard, FoodOrders, GuestLedger, MenuCatalog, Reservations, Revenue,
    RoomPriceBook, RoomRegistry, StaffDirectory,
};

/// 服务器状态 - 持有所有服务的共享句柄
///
/// 每个服务只持有连接池的克隆 (内部为 Arc)，浅拷贝成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | rooms | RoomRegistry | 房间与房态 |
/// | guests | GuestLedger | 入住 / 退房 |
/// | food_orders | FoodOrders | 餐饮订单 |
/// | menu | MenuCatalog | 菜单 |
/// | revenue | Revenue | 收入与营收报表 |
/// | cleaning | CleaningCoordinator | 清洁任务 |
/// | staff | StaffDirectory | 员工 |
/// | dashboard | Dashboard | 前台总览 |
/// | reservations | Reservations | 预订 |
/// | room_prices | RoomPriceBook | 房价 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    pub rooms: RoomRegistry,
    pub guests: GuestLedger,
    pub food_orders: FoodOrders,
    pub menu: MenuCatalog,
    pub revenue: Revenue,
    pub cleaning: CleaningCoordinator,
    pub staff: StaffDirectory,
    pub dashboard: Dashboard,
    pub reservations: Reservations,
    pub room_prices: RoomPriceBook,
}

impl ServerState {
    /// 用已有连接池构造所有服务 (测试中直接使用)
    pub fn from_pool(config: Config, pool: SqlitePool) -> Self {
        let tz = config.timezone;
        Self {
            rooms: RoomRegistry::new(pool.clone()),
            guests: GuestLedger::new(pool.clone(), tz),
            food_orders: FoodOrders::new(pool.clone(), tz),
            menu: MenuCatalog::new(pool.clone()),
            revenue: Revenue::new(pool.clone(), tz),
            cleaning: CleaningCoordinator::new(pool.clone()),
            staff: StaffDirectory::new(pool.clone()),
            dashboard: Dashboard::new(pool.clone(), tz),
            reservations: Reservations::new(pool.clone()),
            room_prices: RoomPriceBook::new(pool.clone()),
            config,
            pool,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 校验配置并确保工作目录存在
    /// 2. 数据库 (WAL + 迁移)
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;
        config.ensure_work_dir()?;

        let db = DbService::new(
            &config.database_path,
            config.db_max_connections,
            config.db_busy_timeout_ms,
        )
        .await?;

        tracing::info!(
            timezone = %config.timezone,
            environment = %config.environment,
            "Server state initialized"
        );
        Ok(Self::from_pool(config.clone(), db.pool))
    }
}
