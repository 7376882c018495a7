use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fukurow_dl::{Axiom, ClassExpression, Entity, Individual, OwlDlOntology, OwlIri, PropertyExpression};
use fukurow_locality::{
    LocalityChecker, LocalityKind, ModuleExtractor, ModuleType, Signature, SyntacticLocalityChecker,
};

fn class_iri(i: usize) -> OwlIri {
    OwlIri::new(format!("http://example.org/Class{}", i))
}

/// A subclass chain with an existential side branch per class
fn create_test_ontology(size: usize) -> OwlDlOntology {
    let mut ontology = OwlDlOntology::new();
    for i in 0..size {
        let class = ClassExpression::Named(class_iri(i));
        let property = PropertyExpression::object(format!("http://example.org/property{}", i % 7));

        ontology.add_axiom(Axiom::Declaration(Entity::Class(class_iri(i))));
        if i > 0 {
            ontology.add_axiom(Axiom::SubClassOf(class.clone(), ClassExpression::Named(class_iri(i - 1))));
        }
        ontology.add_axiom(Axiom::SubClassOf(
            class.clone(),
            ClassExpression::some(property, ClassExpression::Named(class_iri((i * 31) % size))),
        ));
        if i % 10 == 0 {
            ontology.add_axiom(Axiom::ClassAssertion(
                class,
                Individual::new(format!("http://example.org/ind{}", i)),
            ));
        }
    }
    ontology
}

fn benchmark_locality_check(c: &mut Criterion) {
    let ontology = create_test_ontology(200);
    let signature = Signature::from_entities(
        (0..100).map(|i| Entity::Class(class_iri(i))),
        fukurow_locality::LocalityConfig::uniform(LocalityKind::Bottom),
    );

    c.bench_function("locality_check_200_classes", |b| {
        b.iter(|| {
            let checker = SyntacticLocalityChecker::new(&signature);
            let non_local = ontology
                .logical_axioms()
                .filter(|axiom| !checker.is_local(axiom))
                .count();
            black_box(non_local)
        })
    });
}

fn benchmark_module_extraction(c: &mut Criterion) {
    let sizes = vec![50, 200, 500];

    for size in sizes {
        let ontology = create_test_ontology(size);
        let seed = Entity::Class(class_iri(size / 2));

        for module_type in [ModuleType::Bottom, ModuleType::Top, ModuleType::Star] {
            c.bench_function(&format!("{:?}_module_{}_classes", module_type, size).to_lowercase(), |b| {
                b.iter(|| {
                    let module = ModuleExtractor::new(&ontology).extract_for_entity(&seed, module_type);
                    black_box(module.len())
                })
            });
        }
    }
}

criterion_group!(benches, benchmark_locality_check, benchmark_module_extraction);
criterion_main!(benches);
