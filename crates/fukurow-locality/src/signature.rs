//! シグネチャ (語彙の部分集合)

use crate::config::{LocalityConfig, LocalityKind};
use fukurow_dl::{Entity, EntityKind, OwlIri};
use std::collections::HashSet;

/// A subset of the ontology vocabulary, partitioned by entity kind,
/// together with the locality flavour used for entities outside it.
///
/// Datatypes have no flavour of their own: rdfs:Literal is always ⊤ and
/// other datatypes are never replaced, whatever the config says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    classes: HashSet<OwlIri>,
    object_properties: HashSet<OwlIri>,
    data_properties: HashSet<OwlIri>,
    individuals: HashSet<OwlIri>,
    datatypes: HashSet<OwlIri>,
    config: LocalityConfig,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LocalityConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use the same locality kind for classes and properties
    pub fn with_locality(kind: LocalityKind) -> Self {
        Self::with_config(LocalityConfig::uniform(kind))
    }

    pub fn from_entities<I>(entities: I, config: LocalityConfig) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut signature = Self::with_config(config);
        signature.extend(entities);
        signature
    }

    pub fn config(&self) -> LocalityConfig {
        self.config
    }

    /// Out-of-signature classes are universal
    pub fn top_class_locality(&self) -> bool {
        self.config.classes.is_top()
    }

    /// Out-of-signature properties are universal relations
    pub fn top_property_locality(&self) -> bool {
        self.config.properties.is_top()
    }

    /// Locality flavour applied to entities of `kind`
    pub fn top_locality(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::ObjectProperty | EntityKind::DataProperty => self.top_property_locality(),
            EntityKind::Class | EntityKind::NamedIndividual | EntityKind::Datatype => {
                self.top_class_locality()
            }
        }
    }

    /// The entity is outside the signature and read as ⊤
    pub fn is_top_local(&self, kind: EntityKind, iri: &OwlIri) -> bool {
        self.top_locality(kind) && !self.contains_iri(kind, iri)
    }

    /// The entity is outside the signature and read as ⊥
    pub fn is_bottom_local(&self, kind: EntityKind, iri: &OwlIri) -> bool {
        !self.top_locality(kind) && !self.contains_iri(kind, iri)
    }

    fn set(&self, kind: EntityKind) -> &HashSet<OwlIri> {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::ObjectProperty => &self.object_properties,
            EntityKind::DataProperty => &self.data_properties,
            EntityKind::NamedIndividual => &self.individuals,
            EntityKind::Datatype => &self.datatypes,
        }
    }

    fn set_mut(&mut self, kind: EntityKind) -> &mut HashSet<OwlIri> {
        match kind {
            EntityKind::Class => &mut self.classes,
            EntityKind::ObjectProperty => &mut self.object_properties,
            EntityKind::DataProperty => &mut self.data_properties,
            EntityKind::NamedIndividual => &mut self.individuals,
            EntityKind::Datatype => &mut self.datatypes,
        }
    }

    pub fn contains(&self, entity: &Entity) -> bool {
        self.contains_iri(entity.kind(), entity.iri())
    }

    pub fn contains_iri(&self, kind: EntityKind, iri: &OwlIri) -> bool {
        self.set(kind).contains(iri)
    }

    /// Returns true if the entity was not already present
    pub fn insert(&mut self, entity: Entity) -> bool {
        let kind = entity.kind();
        let iri = match entity {
            Entity::Class(iri)
            | Entity::ObjectProperty(iri)
            | Entity::DataProperty(iri)
            | Entity::NamedIndividual(iri)
            | Entity::Datatype(iri) => iri,
        };
        self.set_mut(kind).insert(iri)
    }

    pub fn is_top_entity(entity: &Entity) -> bool {
        entity.is_top_entity()
    }

    pub fn is_bottom_entity(entity: &Entity) -> bool {
        entity.is_bottom_entity()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
            + self.object_properties.len()
            + self.data_properties.len()
            + self.individuals.len()
            + self.datatypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        [
            EntityKind::Class,
            EntityKind::ObjectProperty,
            EntityKind::DataProperty,
            EntityKind::NamedIndividual,
            EntityKind::Datatype,
        ]
        .into_iter()
        .flat_map(move |kind| self.set(kind).iter().map(move |iri| Entity::new(kind, iri.clone())))
    }

    /// Whether every entity of `other` is in this signature
    pub fn is_superset(&self, other: &Signature) -> bool {
        self.classes.is_superset(&other.classes)
            && self.object_properties.is_superset(&other.object_properties)
            && self.data_properties.is_superset(&other.data_properties)
            && self.individuals.is_superset(&other.individuals)
            && self.datatypes.is_superset(&other.datatypes)
    }
}

impl Extend<Entity> for Signature {
    fn extend<I: IntoIterator<Item = Entity>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

impl FromIterator<Entity> for Signature {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self::from_entities(iter, LocalityConfig::default())
    }
}
