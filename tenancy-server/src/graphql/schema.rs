use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::mutations::Mutation;
use crate::graphql::queries::Query;

pub type TenancySchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(context: GraphQLContext) -> TenancySchema {
    Schema::build(Query, Mutation::default(), EmptySubscription)
        .data(context)
        .finish()
}
