use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("buffer is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unrecognized {kind} type `{tag}`")]
    UnrecognizedTag { kind: &'static str, tag: String },

    #[error("don't know how to convert task `{id}` of type {tag}")]
    UnsupportedTask { tag: String, id: String },

    #[error("don't know how to convert reward `{id}` of type {tag}")]
    UnsupportedReward { tag: String, id: String },

    #[error("invalid reward `{reward}`: no reward table matches and no table_data is present")]
    UnresolvedRewardTable { reward: String },

    #[error("don't know how to convert reward `{reward}`: table `{table}` has no loot_table_id")]
    UnsupportedRewardTable { reward: String, table: String },

    #[error("invalid legacy quest id `{0}`")]
    InvalidQuestId(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
