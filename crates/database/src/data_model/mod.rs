use model::{Resource, WithId};
use utility::id::Id;

pub mod charging_station;
pub mod parking_lot;
pub mod recommendation;
pub mod site;

/// A row as it is read from one of the resource tables.
pub trait DatabaseRow {
    type Model: Resource;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn with_ids<R: DatabaseRow>(rows: Vec<R>) -> Vec<WithId<R::Model>> {
    rows.into_iter().map(with_id).collect::<Vec<_>>()
}

pub fn with_id<R: DatabaseRow>(row: R) -> WithId<R::Model> {
    WithId::new(row.get_id(), row.to_model())
}
