use async_trait::async_trait;
use deadpool_redis::{
    redis::{AsyncCommands, Script},
    Pool,
};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    PageResult, TopicCacheError, TopicListCache, TopicListKey, TopicSummary,
    TOPIC_LIST_CACHE_NAME,
};

/// Stores a page only while the generation is still the one the caller read.
///
/// KEYS[1] generation counter, KEYS[2] entry key, KEYS[3] key index.
/// ARGV[1] expected generation, ARGV[2] serialized page.
const PUT_IF_CURRENT: &str = r"
local current = tonumber(redis.call('GET', KEYS[1]) or '0')
if current ~= tonumber(ARGV[1]) then
    return 0
end
redis.call('SET', KEYS[2], ARGV[2])
redis.call('SADD', KEYS[3], KEYS[2])
return 1
";

/// Deletes every indexed entry and the index, then bumps the generation.
///
/// KEYS[1] key index, KEYS[2] generation counter.
const EVICT_ALL: &str = r"
local entries = redis.call('SMEMBERS', KEYS[1])
for _, key in ipairs(entries) do
    redis.call('DEL', key)
end
redis.call('DEL', KEYS[1])
redis.call('INCR', KEYS[2])
return #entries
";

/// Redis-backed listing cache shared by every instance of the service.
///
/// ## Redis data model
///
/// ```text
/// {ns}:entry:{encoded key} -> JSON page
/// {ns}:keys                -> SET of live entry keys
/// {ns}:generation          -> counter bumped by every clear-all
/// ```
///
/// Both the guarded fill and the clear-all run as Lua scripts, so a clear-all
/// never interleaves with a fill.
pub struct RedisTopicListCache {
    pool: Arc<Pool>,
    namespace: String,
    put_script: Script,
    evict_script: Script,
}

impl RedisTopicListCache {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self::with_namespace(pool, TOPIC_LIST_CACHE_NAME)
    }

    pub fn with_namespace(pool: Arc<Pool>, namespace: &str) -> Self {
        Self {
            pool,
            namespace: namespace.to_string(),
            put_script: Script::new(PUT_IF_CURRENT),
            evict_script: Script::new(EVICT_ALL),
        }
    }

    fn entry_key(&self, key: &TopicListKey) -> Result<String, TopicCacheError> {
        Ok(format!("{}:entry:{}", self.namespace, key.encode()?))
    }

    fn index_key(&self) -> String {
        format!("{}:keys", self.namespace)
    }

    fn generation_key(&self) -> String {
        format!("{}:generation", self.namespace)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TopicCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| TopicCacheError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TopicListCache for RedisTopicListCache {
    async fn generation(&self) -> Result<u64, TopicCacheError> {
        let mut conn = self.get_conn().await?;

        let generation: Option<u64> = conn
            .get(self.generation_key())
            .await
            .map_err(|e| TopicCacheError::Backend(e.to_string()))?;

        Ok(generation.unwrap_or(0))
    }

    async fn get(
        &self,
        key: &TopicListKey,
    ) -> Result<Option<PageResult<TopicSummary>>, TopicCacheError> {
        let entry_key = self.entry_key(key)?;
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(&entry_key)
            .await
            .map_err(|e| TopicCacheError::Backend(e.to_string()))?;

        raw.map(|json| {
            serde_json::from_str(&json).map_err(|e| TopicCacheError::Serialization(e.to_string()))
        })
        .transpose()
    }

    async fn put(
        &self,
        key: TopicListKey,
        page: PageResult<TopicSummary>,
        generation: u64,
    ) -> Result<bool, TopicCacheError> {
        let entry_key = self.entry_key(&key)?;
        let payload =
            serde_json::to_string(&page).map_err(|e| TopicCacheError::Serialization(e.to_string()))?;
        let mut conn = self.get_conn().await?;

        let stored: i64 = self
            .put_script
            .key(self.generation_key())
            .key(&entry_key)
            .key(self.index_key())
            .arg(generation)
            .arg(payload)
            .invoke_async(&mut *conn)
            .await
            .map_err(|e| TopicCacheError::Backend(e.to_string()))?;

        Ok(stored == 1)
    }

    async fn evict_all(&self) -> Result<(), TopicCacheError> {
        let mut conn = self.get_conn().await?;

        let _evicted: i64 = self
            .evict_script
            .key(self.index_key())
            .key(self.generation_key())
            .invoke_async(&mut *conn)
            .await
            .map_err(|e| TopicCacheError::Backend(e.to_string()))?;

        Ok(())
    }
}
