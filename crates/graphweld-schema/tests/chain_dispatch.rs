//! Dispatch tests for the parameter resolver chain, instrumented with
//! call-counting resolvers.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use graphweld_core::{DocMetadata, ParamTag, ParameterBinding, ParameterDescriptor};
use graphweld_schema::{
    MapperConfig, ParameterResolver, ResolverChain, Result, SchemaError,
};
use indexmap::IndexMap;

/// Counts invocations and answers with a fixed outcome.
struct CountingResolver {
    label: &'static str,
    matches: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    fn new(label: &'static str, matches: bool) -> (Box<dyn ParameterResolver>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = Box::new(Self {
            label,
            matches,
            calls: Arc::clone(&calls),
        });
        (resolver, calls)
    }
}

impl ParameterResolver for CountingResolver {
    fn resolve(
        &self,
        _parameter: &ParameterDescriptor,
        _doc: &DocMetadata,
        _param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.matches {
            Ok(Some(ParameterBinding::Context {
                key: self.label.to_string(),
            }))
        } else {
            Ok(None)
        }
    }
}

/// Fails every resolution attempt.
struct FailingResolver;

impl ParameterResolver for FailingResolver {
    fn resolve(
        &self,
        parameter: &ParameterDescriptor,
        _doc: &DocMetadata,
        _param_tags: &HashMap<String, ParamTag>,
    ) -> Result<Option<ParameterBinding>> {
        Err(SchemaError::unresolved_parameter(&parameter.name))
    }
}

fn resolve(chain: &ResolverChain, name: &str) -> Result<Option<ParameterBinding>> {
    let parameter = ParameterDescriptor::new(name, 0);
    chain.resolve(&parameter, &DocMetadata::default(), &HashMap::new())
}

#[test]
fn match_short_circuits_later_resolvers() {
    let (first, first_calls) = CountingResolver::new("first", false);
    let (second, second_calls) = CountingResolver::new("second", true);
    let (third, third_calls) = CountingResolver::new("third", true);
    let chain = ResolverChain::new([first, second, third]);

    let binding = resolve(&chain, "p").unwrap().unwrap();
    assert_eq!(binding, ParameterBinding::Context { key: "second".into() });

    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    // The resolver after the match must never have been consulted.
    assert_eq!(third_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn no_match_consults_every_resolver_once() {
    let (first, first_calls) = CountingResolver::new("first", false);
    let (second, second_calls) = CountingResolver::new("second", false);
    let (third, third_calls) = CountingResolver::new("third", false);
    let chain = ResolverChain::new([first, second, third]);

    assert!(resolve(&chain, "p").unwrap().is_none());

    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    assert_eq!(third_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn winner_depends_on_order_not_capability() {
    let (a, _) = CountingResolver::new("a", true);
    let (b, _) = CountingResolver::new("b", true);
    let forward = ResolverChain::new([a, b]);

    let (a, _) = CountingResolver::new("a", true);
    let (b, _) = CountingResolver::new("b", true);
    let reversed = ResolverChain::new([b, a]);

    let forward_winner = resolve(&forward, "p").unwrap().unwrap();
    let reversed_winner = resolve(&reversed, "p").unwrap().unwrap();

    assert_eq!(forward_winner, ParameterBinding::Context { key: "a".into() });
    assert_eq!(reversed_winner, ParameterBinding::Context { key: "b".into() });
    assert_ne!(forward_winner, reversed_winner);
}

#[test]
fn delegate_error_propagates_and_stops_iteration() {
    let (before, before_calls) = CountingResolver::new("before", false);
    let (after, after_calls) = CountingResolver::new("after", true);
    let chain = ResolverChain::new([
        before,
        Box::new(FailingResolver) as Box<dyn ParameterResolver>,
        after,
    ]);

    let err = resolve(&chain, "broken").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::UnresolvedParameter { parameter } if parameter == "broken"
    ));

    assert_eq!(before_calls.load(Ordering::SeqCst), 1);
    assert_eq!(after_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn same_chain_instance_serves_many_parameters() {
    let (first, first_calls) = CountingResolver::new("first", true);
    let chain = ResolverChain::new([first]);

    for position in 0..4 {
        let parameter = ParameterDescriptor::new(format!("p{position}"), position);
        let binding = chain
            .resolve(&parameter, &DocMetadata::default(), &HashMap::new())
            .unwrap();
        assert!(binding.is_some());
    }

    assert_eq!(first_calls.load(Ordering::SeqCst), 4);
}

#[test]
fn configured_chain_prioritizes_context_over_service_and_argument() {
    // "Clock" is deliberately catalogued both as a context type and as a
    // service, and it would also qualify as a plain argument type. The
    // chain order decides.
    let mut service_types = IndexMap::new();
    service_types.insert("Clock".to_string(), "app.clock".to_string());
    service_types.insert("Mailer".to_string(), "app.mailer".to_string());

    let config = MapperConfig {
        context_types: vec!["Clock".to_string()],
        service_types,
        ..MapperConfig::default()
    };
    config.validate().unwrap();
    let chain = config.resolver_chain();

    let doc = DocMetadata::default();
    let tags = HashMap::new();

    let clock = ParameterDescriptor::new("clock", 0).typed("Clock");
    assert_eq!(
        chain.resolve(&clock, &doc, &tags).unwrap().unwrap(),
        ParameterBinding::Context { key: "Clock".into() }
    );

    let mailer = ParameterDescriptor::new("mailer", 1).typed("Mailer");
    assert_eq!(
        chain.resolve(&mailer, &doc, &tags).unwrap().unwrap(),
        ParameterBinding::Service {
            service_id: "app.mailer".into()
        }
    );

    let limit = ParameterDescriptor::new("limit", 2).typed("int");
    let binding = chain.resolve(&limit, &doc, &tags).unwrap().unwrap();
    let (name, ty) = binding.as_argument().unwrap();
    assert_eq!(name, "limit");
    assert_eq!(ty.type_name(), "Int");
}

#[test]
fn documented_parameter_carries_description_through_chain() {
    let chain = MapperConfig::default().resolver_chain();

    let mut tags = HashMap::new();
    tags.insert(
        "query".to_string(),
        ParamTag::new(
            Some("string".to_string()),
            Some("Free-text search query".to_string()),
        ),
    );

    let parameter = ParameterDescriptor::new("query", 0);
    let binding = chain
        .resolve(&parameter, &DocMetadata::default(), &tags)
        .unwrap()
        .unwrap();

    match binding {
        ParameterBinding::Argument {
            name,
            description,
            ..
        } => {
            assert_eq!(name, "query");
            assert_eq!(description.as_deref(), Some("Free-text search query"));
        }
        other => panic!("expected argument binding, got {other:?}"),
    }
}
