//! Repository trait 定义

use async_trait::async_trait;
use catalog_errors::AppResult;

/// 基础 Repository trait
///
/// 查找不到记录不是错误：`find_by_id` 返回 `None`，`exists_by_id` 返回 `false`
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync,
{
    /// 保存实体（新建或更新），返回存储后的实体
    async fn save(&self, entity: &T) -> AppResult<T>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// 查询所有
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// 根据 ID 删除，记录不存在时不报错
    async fn delete_by_id(&self, id: &ID) -> AppResult<()>;

    /// 检查是否存在
    async fn exists_by_id(&self, id: &ID) -> AppResult<bool>;

    /// 统计总数
    async fn count(&self) -> AppResult<u64>;
}
