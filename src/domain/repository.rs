use super::model::collection::Collection;

/// 永続化の抽象。Infra層が実装する。
pub trait CatalogRepository {
    type Error: StoreFailure;

    /// 未保存なら `Ok(None)`
    fn load(&self) -> Result<Option<Collection>, Self::Error>;
    /// カタログ全体を置き換える。
    fn save(&self, collection: &Collection) -> Result<(), Self::Error>;
}

/// 保存内容自体が壊れているかを判別できるストレージエラー。
pub trait StoreFailure: std::error::Error + Send + Sync + 'static {
    fn is_corrupt(&self) -> bool;
}
