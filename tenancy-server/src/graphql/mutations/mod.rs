// Mutation module
//
// Each functional area gets its own submodule merged into the root below.

mod app;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(pub app::AppMutation);
