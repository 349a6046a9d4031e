use async_graphql::MergedObject;

use crate::gql::domains::games::GameQuery;
use crate::gql::domains::studios::StudioQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(GameQuery, StudioQuery);
