//! 構文的ローカリティ評価エンジン
//!
//! このクレートは OWL DL オントロジーの構文的ローカリティを提供します:
//! - シグネチャとローカリティ設定 (⊥ / ⊤)
//! - 基数境界評価器と ⊤/⊥ 同値性評価
//! - 公理ごとのローカリティ判定
//! - ローカリティに基づくモジュール抽出

pub mod bound;
pub mod cardinality;
pub mod checker;
pub mod config;
pub mod equivalence;
pub mod module;
pub mod signature;

pub use bound::{LowerBound, UpperBound};
pub use cardinality::{
    CardinalityEvaluator, Filler, LowerBoundComplement, LowerBoundDirect, UpperBoundComplement,
    UpperBoundDirect,
};
pub use checker::{LocalityChecker, SyntacticLocalityChecker};
pub use config::{LocalityConfig, LocalityKind};
pub use equivalence::{EquivalenceEvaluator, Expression};
pub use module::{Module, ModuleExtractor, ModuleType};
pub use signature::Signature;

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalityError {
    #[error("Invalid locality configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid ontology: {0}")]
    Model(#[from] fukurow_dl::OwlDlError),
}
