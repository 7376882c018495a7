//! OWL DL オブジェクトモデル
//!
//! このクレートは OWL 2 DL の構造モデルを提供します:
//! - クラス式・プロパティ式・データレンジ (closed enums)
//! - 公理 (axioms) とそのシグネチャ
//! - 公理コンテナとしてのオントロジー

pub mod model;
pub mod ontology;

pub use model::{
    vocabulary, Axiom, ClassExpression, DataRange, Entity, EntityKind, FacetRestriction,
    Individual, Literal, OwlIri, PropertyExpression,
};
pub use ontology::OwlDlOntology;

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OwlDlError {
    #[error("Invalid axiom: {0}")]
    InvalidAxiom(String),
}
