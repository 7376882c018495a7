//! OWL DL データモデル

use serde::{Deserialize, Serialize};

/// OWL IRI wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OwlIri(pub String);

impl OwlIri {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwlIri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Built-in OWL / RDFS vocabulary
pub mod vocabulary {
    use super::{EntityKind, OwlIri};

    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    pub const OWL_TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    pub const OWL_BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
    pub const OWL_TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
    pub const OWL_BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";
    pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    pub fn owl_thing() -> OwlIri {
        OwlIri::new(OWL_THING)
    }

    pub fn owl_nothing() -> OwlIri {
        OwlIri::new(OWL_NOTHING)
    }

    pub fn owl_top_object_property() -> OwlIri {
        OwlIri::new(OWL_TOP_OBJECT_PROPERTY)
    }

    pub fn owl_bottom_object_property() -> OwlIri {
        OwlIri::new(OWL_BOTTOM_OBJECT_PROPERTY)
    }

    pub fn owl_top_data_property() -> OwlIri {
        OwlIri::new(OWL_TOP_DATA_PROPERTY)
    }

    pub fn owl_bottom_data_property() -> OwlIri {
        OwlIri::new(OWL_BOTTOM_DATA_PROPERTY)
    }

    pub fn rdfs_literal() -> OwlIri {
        OwlIri::new(RDFS_LITERAL)
    }

    /// Whether `iri` names the universal entity of its kind
    pub fn is_top_entity(kind: EntityKind, iri: &OwlIri) -> bool {
        match kind {
            EntityKind::Class => iri.as_str() == OWL_THING,
            EntityKind::ObjectProperty => iri.as_str() == OWL_TOP_OBJECT_PROPERTY,
            EntityKind::DataProperty => iri.as_str() == OWL_TOP_DATA_PROPERTY,
            EntityKind::Datatype => iri.as_str() == RDFS_LITERAL,
            EntityKind::NamedIndividual => false,
        }
    }

    /// Whether `iri` names the empty entity of its kind
    pub fn is_bottom_entity(kind: EntityKind, iri: &OwlIri) -> bool {
        match kind {
            EntityKind::Class => iri.as_str() == OWL_NOTHING,
            EntityKind::ObjectProperty => iri.as_str() == OWL_BOTTOM_OBJECT_PROPERTY,
            EntityKind::DataProperty => iri.as_str() == OWL_BOTTOM_DATA_PROPERTY,
            EntityKind::Datatype | EntityKind::NamedIndividual => false,
        }
    }
}

/// Kind of a named entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    NamedIndividual,
    Datatype,
}

/// Named vocabulary entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Entity {
    Class(OwlIri),
    ObjectProperty(OwlIri),
    DataProperty(OwlIri),
    NamedIndividual(OwlIri),
    Datatype(OwlIri),
}

impl Entity {
    pub fn new(kind: EntityKind, iri: OwlIri) -> Self {
        match kind {
            EntityKind::Class => Entity::Class(iri),
            EntityKind::ObjectProperty => Entity::ObjectProperty(iri),
            EntityKind::DataProperty => Entity::DataProperty(iri),
            EntityKind::NamedIndividual => Entity::NamedIndividual(iri),
            EntityKind::Datatype => Entity::Datatype(iri),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Class(_) => EntityKind::Class,
            Entity::ObjectProperty(_) => EntityKind::ObjectProperty,
            Entity::DataProperty(_) => EntityKind::DataProperty,
            Entity::NamedIndividual(_) => EntityKind::NamedIndividual,
            Entity::Datatype(_) => EntityKind::Datatype,
        }
    }

    pub fn iri(&self) -> &OwlIri {
        match self {
            Entity::Class(iri)
            | Entity::ObjectProperty(iri)
            | Entity::DataProperty(iri)
            | Entity::NamedIndividual(iri)
            | Entity::Datatype(iri) => iri,
        }
    }

    /// owl:Thing, owl:topObjectProperty, owl:topDataProperty or rdfs:Literal
    pub fn is_top_entity(&self) -> bool {
        vocabulary::is_top_entity(self.kind(), self.iri())
    }

    /// owl:Nothing, owl:bottomObjectProperty or owl:bottomDataProperty
    pub fn is_bottom_entity(&self) -> bool {
        vocabulary::is_bottom_entity(self.kind(), self.iri())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.iri())
    }
}

/// OWL Individual
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Individual(pub OwlIri);

impl Individual {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(OwlIri::new(iri))
    }
}

/// Typed literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub datatype: OwlIri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Literal {
    pub fn typed(value: impl Into<String>, datatype: OwlIri) -> Self {
        Self { value: value.into(), datatype, language: None }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::typed(value, OwlIri::new(vocabulary::XSD_STRING))
    }
}

/// OWL DL Property Expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyExpression {
    /// Object property
    ObjectProperty(OwlIri),

    /// Data property
    DataProperty(OwlIri),

    /// Inverse property: R⁻
    InverseOf(Box<PropertyExpression>),
}

impl PropertyExpression {
    pub fn object(iri: impl Into<String>) -> Self {
        PropertyExpression::ObjectProperty(OwlIri::new(iri))
    }

    pub fn data(iri: impl Into<String>) -> Self {
        PropertyExpression::DataProperty(OwlIri::new(iri))
    }

    pub fn inverse(self) -> Self {
        PropertyExpression::InverseOf(Box::new(self))
    }

    /// The named property under any number of inverses
    pub fn named(&self) -> Entity {
        match self {
            PropertyExpression::ObjectProperty(iri) => Entity::ObjectProperty(iri.clone()),
            PropertyExpression::DataProperty(iri) => Entity::DataProperty(iri.clone()),
            PropertyExpression::InverseOf(inner) => inner.named(),
        }
    }
}

/// Facet restriction inside a datatype restriction, e.g. xsd:minInclusive 5
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: OwlIri,
    pub value: Literal,
}

/// OWL 2 data range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataRange {
    /// Named datatype
    Datatype(OwlIri),

    /// Complement relative to the data domain
    ComplementOf(Box<DataRange>),

    IntersectionOf(Vec<DataRange>),

    UnionOf(Vec<DataRange>),

    /// Enumeration of literals
    OneOf(Vec<Literal>),

    /// Datatype constrained by facets
    DatatypeRestriction {
        datatype: OwlIri,
        facets: Vec<FacetRestriction>,
    },
}

impl DataRange {
    pub fn datatype(iri: impl Into<String>) -> Self {
        DataRange::Datatype(OwlIri::new(iri))
    }

    pub fn literal() -> Self {
        DataRange::Datatype(vocabulary::rdfs_literal())
    }
}

/// OWL DL Class Expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    /// Named class
    Named(OwlIri),

    /// owl:Thing (⊤)
    Thing,

    /// owl:Nothing (⊥)
    Nothing,

    /// Intersection of classes: C1 ⊓ C2 ⊓ ... ⊓ Cn
    IntersectionOf(Vec<ClassExpression>),

    /// Union of classes: C1 ⊔ C2 ⊔ ... ⊔ Cn
    UnionOf(Vec<ClassExpression>),

    /// Complement of class: ¬C
    ComplementOf(Box<ClassExpression>),

    /// Enumeration of individuals: {i1, i2, ..., in}
    OneOf(Vec<Individual>),

    /// Existential restriction: ∃R.C
    SomeValuesFrom {
        property: PropertyExpression,
        class: Box<ClassExpression>,
    },

    /// Universal restriction: ∀R.C
    AllValuesFrom {
        property: PropertyExpression,
        class: Box<ClassExpression>,
    },

    /// Has value: ∃R.{i}
    HasValue {
        property: PropertyExpression,
        individual: Individual,
    },

    /// Local reflexivity: ∃R.Self
    HasSelf(PropertyExpression),

    /// Minimum cardinality: ≥n R.C
    MinCardinality {
        cardinality: u32,
        property: PropertyExpression,
        class: Option<Box<ClassExpression>>, // None means owl:Thing
    },

    /// Maximum cardinality: ≤n R.C
    MaxCardinality {
        cardinality: u32,
        property: PropertyExpression,
        class: Option<Box<ClassExpression>>, // None means owl:Thing
    },

    /// Exact cardinality: =n R.C
    ExactCardinality {
        cardinality: u32,
        property: PropertyExpression,
        class: Option<Box<ClassExpression>>, // None means owl:Thing
    },

    /// ∃U.D for a data property U
    DataSomeValuesFrom {
        property: PropertyExpression,
        range: DataRange,
    },

    /// ∀U.D for a data property U
    DataAllValuesFrom {
        property: PropertyExpression,
        range: DataRange,
    },

    /// ∃U.{v}
    DataHasValue {
        property: PropertyExpression,
        value: Literal,
    },

    DataMinCardinality {
        cardinality: u32,
        property: PropertyExpression,
        range: Option<DataRange>, // None means rdfs:Literal
    },

    DataMaxCardinality {
        cardinality: u32,
        property: PropertyExpression,
        range: Option<DataRange>, // None means rdfs:Literal
    },

    DataExactCardinality {
        cardinality: u32,
        property: PropertyExpression,
        range: Option<DataRange>, // None means rdfs:Literal
    },
}

impl ClassExpression {
    pub fn named(iri: impl Into<String>) -> Self {
        ClassExpression::Named(OwlIri::new(iri))
    }

    pub fn complement(self) -> Self {
        ClassExpression::ComplementOf(Box::new(self))
    }

    pub fn some(property: PropertyExpression, class: ClassExpression) -> Self {
        ClassExpression::SomeValuesFrom { property, class: Box::new(class) }
    }

    pub fn only(property: PropertyExpression, class: ClassExpression) -> Self {
        ClassExpression::AllValuesFrom { property, class: Box::new(class) }
    }
}

/// OWL DL Axiom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axiom {
    /// Declaration(entity)
    Declaration(Entity),

    /// SubClassOf with complex class expressions
    SubClassOf(ClassExpression, ClassExpression),

    /// EquivalentClasses with complex expressions
    EquivalentClasses(Vec<ClassExpression>),

    /// DisjointClasses with complex expressions
    DisjointClasses(Vec<ClassExpression>),

    /// DisjointUnion(A C1 ... Cn)
    DisjointUnion(OwlIri, Vec<ClassExpression>),

    /// SubObjectPropertyOf(P Q)
    SubObjectPropertyOf(PropertyExpression, PropertyExpression),

    /// SubObjectPropertyOf(ObjectPropertyChain(P1 ... Pn) Q)
    SubPropertyChainOf(Vec<PropertyExpression>, PropertyExpression),

    EquivalentObjectProperties(Vec<PropertyExpression>),

    DisjointObjectProperties(Vec<PropertyExpression>),

    InverseObjectProperties(PropertyExpression, PropertyExpression),

    /// ObjectPropertyDomain with complex class
    ObjectPropertyDomain(PropertyExpression, ClassExpression),

    /// ObjectPropertyRange with complex class
    ObjectPropertyRange(PropertyExpression, ClassExpression),

    FunctionalObjectProperty(PropertyExpression),

    InverseFunctionalObjectProperty(PropertyExpression),

    ReflexiveObjectProperty(PropertyExpression),

    IrreflexiveObjectProperty(PropertyExpression),

    SymmetricObjectProperty(PropertyExpression),

    AsymmetricObjectProperty(PropertyExpression),

    TransitiveObjectProperty(PropertyExpression),

    SubDataPropertyOf(PropertyExpression, PropertyExpression),

    EquivalentDataProperties(Vec<PropertyExpression>),

    DisjointDataProperties(Vec<PropertyExpression>),

    DataPropertyDomain(PropertyExpression, ClassExpression),

    DataPropertyRange(PropertyExpression, DataRange),

    FunctionalDataProperty(PropertyExpression),

    /// DatatypeDefinition(D range)
    DatatypeDefinition(OwlIri, DataRange),

    /// HasKey(C (P1 ... Pn))
    HasKey(ClassExpression, Vec<PropertyExpression>),

    /// Same individual
    SameIndividual(Vec<Individual>),

    /// Different individuals
    DifferentIndividuals(Vec<Individual>),

    /// Class assertion with complex class
    ClassAssertion(ClassExpression, Individual),

    /// Object property assertion
    ObjectPropertyAssertion(PropertyExpression, Individual, Individual),

    /// Negative object property assertion
    NegativeObjectPropertyAssertion(PropertyExpression, Individual, Individual),

    DataPropertyAssertion(PropertyExpression, Individual, Literal),

    NegativeDataPropertyAssertion(PropertyExpression, Individual, Literal),
}
