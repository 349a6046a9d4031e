use async_graphql::MergedObject;

use crate::gql::domains::games::GameMutation;
use crate::gql::domains::studios::StudioMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(GameMutation, StudioMutation);
