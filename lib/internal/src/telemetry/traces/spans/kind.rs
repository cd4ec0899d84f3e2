#[derive(Debug, strum::Display, strum::AsRefStr, strum::IntoStaticStr, strum::EnumString)]
#[non_exhaustive]
pub enum SpanKind {
    #[strum(serialize = "graphql.endpoint")]
    GraphqlEndpoint,
    #[strum(serialize = "graphql.resolver")]
    GraphqlResolver,
}
