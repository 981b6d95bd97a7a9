use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::models::event::{Event, EventPatch, NewEvent};
use crate::models::event_type::EventType;
use crate::models::holiday::{Holiday, NewHoliday};
use crate::models::recommendation::{Recommendation, RecommendationDraft, RecommendationStatus};
use crate::models::region::Region;
use crate::storage::columns::{
    FieldMap, FieldValue, EVENT_FIELDS, EVENT_TYPE_FIELDS, HOLIDAY_FIELDS, RECOMMENDATION_FIELDS,
    REGION_FIELDS,
};
use crate::storage::{CalendarFilter, CalendarStore, RecommendationFilter, StorageError};

/// [`CalendarStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_value(qb: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => qb.push_bind(v),
        FieldValue::Date(v) => qb.push_bind(v),
        FieldValue::Id(v) => qb.push_bind(v),
        FieldValue::Flag(v) => qb.push_bind(v),
        FieldValue::Number(v) => qb.push_bind(v),
    };
}

/// `SELECT * FROM <table> WHERE TRUE`, ready for `AND` conditions.
fn select_all(map: &FieldMap) -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new(format!("SELECT * FROM {} WHERE TRUE", map.table))
}

fn push_condition(
    qb: &mut QueryBuilder<'static, Postgres>,
    map: &FieldMap,
    field: &'static str,
    op: &str,
    value: FieldValue,
) -> Result<(), StorageError> {
    qb.push(format!(" AND {} {op} ", map.require_column(field)?));
    push_value(qb, value);
    Ok(())
}

fn push_order(
    qb: &mut QueryBuilder<'static, Postgres>,
    map: &FieldMap,
    field: &'static str,
    direction: &str,
) -> Result<(), StorageError> {
    qb.push(format!(" ORDER BY {} {direction}", map.require_column(field)?));
    Ok(())
}

fn select_by_id(map: &FieldMap, id: i32) -> Result<QueryBuilder<'static, Postgres>, StorageError> {
    let mut qb = select_all(map);
    push_condition(&mut qb, map, "id", "=", FieldValue::Id(Some(id)))?;
    Ok(qb)
}

fn insert_returning(
    map: &FieldMap,
    values: Vec<(&'static str, FieldValue)>,
) -> Result<QueryBuilder<'static, Postgres>, StorageError> {
    let columns = values
        .iter()
        .map(|(field, _)| map.require_column(field))
        .collect::<Result<Vec<_>, _>>()?;

    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        map.table,
        columns.join(", ")
    ));
    for (i, (_, value)) in values.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(") RETURNING *");
    Ok(qb)
}

/// `UPDATE ... SET updated_at = NOW(), <assignments> WHERE id = $n RETURNING *`.
fn update_returning(
    map: &FieldMap,
    id: i32,
    assignments: Vec<(&'static str, FieldValue)>,
) -> Result<QueryBuilder<'static, Postgres>, StorageError> {
    let mut qb = QueryBuilder::new(format!(
        "UPDATE {} SET {} = NOW()",
        map.table,
        map.require_column("updatedAt")?
    ));
    for (field, value) in assignments {
        qb.push(format!(", {} = ", map.require_column(field)?));
        push_value(&mut qb, value);
    }
    qb.push(format!(" WHERE {} = ", map.require_column("id")?));
    qb.push_bind(id);
    qb.push(" RETURNING *");
    Ok(qb)
}

fn delete_by_id(map: &FieldMap, id: i32) -> Result<QueryBuilder<'static, Postgres>, StorageError> {
    let mut qb = QueryBuilder::new(format!(
        "DELETE FROM {} WHERE {} = ",
        map.table,
        map.require_column("id")?
    ));
    qb.push_bind(id);
    Ok(qb)
}

#[async_trait]
impl CalendarStore for PgStore {
    async fn list_active_regions(&self) -> Result<Vec<Region>, StorageError> {
        let mut qb = select_all(&REGION_FIELDS);
        push_condition(&mut qb, &REGION_FIELDS, "isActive", "=", FieldValue::Flag(true))?;
        push_order(&mut qb, &REGION_FIELDS, "id", "ASC")?;
        Ok(qb.build_query_as::<Region>().fetch_all(&self.pool).await?)
    }

    async fn get_region(&self, id: i32) -> Result<Option<Region>, StorageError> {
        let mut qb = select_by_id(&REGION_FIELDS, id)?;
        Ok(qb.build_query_as::<Region>().fetch_optional(&self.pool).await?)
    }

    async fn list_event_types(&self) -> Result<Vec<EventType>, StorageError> {
        let mut qb = select_all(&EVENT_TYPE_FIELDS);
        push_order(&mut qb, &EVENT_TYPE_FIELDS, "id", "ASC")?;
        Ok(qb.build_query_as::<EventType>().fetch_all(&self.pool).await?)
    }

    async fn list_events(&self, filter: &CalendarFilter) -> Result<Vec<Event>, StorageError> {
        let mut qb = select_all(&EVENT_FIELDS);
        if let Some(region_id) = filter.region_id {
            push_condition(&mut qb, &EVENT_FIELDS, "regionId", "=", FieldValue::Id(Some(region_id)))?;
        }
        if let Some(start) = filter.start_date {
            push_condition(&mut qb, &EVENT_FIELDS, "startDate", ">=", FieldValue::Date(Some(start)))?;
        }
        if let Some(end) = filter.end_date {
            push_condition(&mut qb, &EVENT_FIELDS, "endDate", "<=", FieldValue::Date(Some(end)))?;
        }
        push_order(&mut qb, &EVENT_FIELDS, "startDate", "ASC")?;
        Ok(qb.build_query_as::<Event>().fetch_all(&self.pool).await?)
    }

    async fn get_event(&self, id: i32) -> Result<Option<Event>, StorageError> {
        let mut qb = select_by_id(&EVENT_FIELDS, id)?;
        Ok(qb.build_query_as::<Event>().fetch_optional(&self.pool).await?)
    }

    async fn create_event(&self, event: &NewEvent) -> Result<Event, StorageError> {
        let mut qb = insert_returning(&EVENT_FIELDS, event.values())?;
        Ok(qb.build_query_as::<Event>().fetch_one(&self.pool).await?)
    }

    async fn update_event(&self, id: i32, patch: &EventPatch) -> Result<Option<Event>, StorageError> {
        let mut qb = update_returning(&EVENT_FIELDS, id, patch.assignments())?;
        Ok(qb.build_query_as::<Event>().fetch_optional(&self.pool).await?)
    }

    async fn delete_event(&self, id: i32) -> Result<u64, StorageError> {
        let mut qb = delete_by_id(&EVENT_FIELDS, id)?;
        let result = qb.build().execute(&self.pool).await?;
        debug!("Deleted {} event row(s) for id {id}", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn list_holidays(&self, filter: &CalendarFilter) -> Result<Vec<Holiday>, StorageError> {
        let mut qb = select_all(&HOLIDAY_FIELDS);
        if let Some(region_id) = filter.region_id {
            push_condition(&mut qb, &HOLIDAY_FIELDS, "regionId", "=", FieldValue::Id(Some(region_id)))?;
        }
        if let Some(start) = filter.start_date {
            push_condition(&mut qb, &HOLIDAY_FIELDS, "date", ">=", FieldValue::Date(Some(start)))?;
        }
        if let Some(end) = filter.end_date {
            push_condition(&mut qb, &HOLIDAY_FIELDS, "date", "<=", FieldValue::Date(Some(end)))?;
        }
        push_order(&mut qb, &HOLIDAY_FIELDS, "date", "ASC")?;
        Ok(qb.build_query_as::<Holiday>().fetch_all(&self.pool).await?)
    }

    async fn create_holiday(&self, holiday: &NewHoliday) -> Result<Holiday, StorageError> {
        let mut qb = insert_returning(&HOLIDAY_FIELDS, holiday.values())?;
        Ok(qb.build_query_as::<Holiday>().fetch_one(&self.pool).await?)
    }

    async fn list_recommendations(
        &self,
        filter: &RecommendationFilter,
    ) -> Result<Vec<Recommendation>, StorageError> {
        let mut qb = select_all(&RECOMMENDATION_FIELDS);
        if let Some(region_id) = filter.region_id {
            push_condition(
                &mut qb,
                &RECOMMENDATION_FIELDS,
                "regionId",
                "=",
                FieldValue::Id(Some(region_id)),
            )?;
        }
        if let Some(status) = filter.status {
            push_condition(
                &mut qb,
                &RECOMMENDATION_FIELDS,
                "status",
                "=",
                FieldValue::Text(Some(status.as_str().to_string())),
            )?;
        }
        push_order(&mut qb, &RECOMMENDATION_FIELDS, "createdAt", "DESC")?;
        Ok(qb.build_query_as::<Recommendation>().fetch_all(&self.pool).await?)
    }

    async fn get_recommendation(&self, id: i32) -> Result<Option<Recommendation>, StorageError> {
        let mut qb = select_by_id(&RECOMMENDATION_FIELDS, id)?;
        Ok(qb.build_query_as::<Recommendation>().fetch_optional(&self.pool).await?)
    }

    async fn create_recommendation(
        &self,
        draft: &RecommendationDraft,
    ) -> Result<Recommendation, StorageError> {
        let mut qb = insert_returning(&RECOMMENDATION_FIELDS, draft.values())?;
        Ok(qb.build_query_as::<Recommendation>().fetch_one(&self.pool).await?)
    }

    async fn update_recommendation_status(
        &self,
        id: i32,
        status: RecommendationStatus,
    ) -> Result<Option<Recommendation>, StorageError> {
        let assignments = vec![(
            "status",
            FieldValue::Text(Some(status.as_str().to_string())),
        )];
        let mut qb = update_returning(&RECOMMENDATION_FIELDS, id, assignments)?;
        Ok(qb.build_query_as::<Recommendation>().fetch_optional(&self.pool).await?)
    }

    async fn delete_recommendation(&self, id: i32) -> Result<u64, StorageError> {
        let mut qb = delete_by_id(&RECOMMENDATION_FIELDS, id)?;
        let result = qb.build().execute(&self.pool).await?;
        debug!("Deleted {} recommendation row(s) for id {id}", result.rows_affected());
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_insert_sql_uses_mapped_columns() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let event = NewEvent {
            title: "Season opener".to_string(),
            description: None,
            start_date: date,
            end_date: date,
            region_id: Some(2),
            event_type_id: Some(2),
            is_holiday: false,
        };
        let qb = insert_returning(&EVENT_FIELDS, event.values()).unwrap();
        assert_eq!(
            qb.sql(),
            "INSERT INTO events (title, description, start_date, end_date, region_id, \
             event_type_id, is_holiday) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *"
        );
    }

    #[test]
    fn test_update_sql_touches_only_patched_columns() {
        let patch = EventPatch {
            title: Some("Derby week".to_string()),
            description: Some(None),
            ..Default::default()
        };
        let qb = update_returning(&EVENT_FIELDS, 7, patch.assignments()).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE events SET updated_at = NOW(), title = $1, description = $2 \
             WHERE id = $3 RETURNING *"
        );
    }

    #[test]
    fn test_filters_and_order_use_mapped_columns() {
        let mut qb = select_all(&EVENT_FIELDS);
        push_condition(&mut qb, &EVENT_FIELDS, "regionId", "=", FieldValue::Id(Some(1))).unwrap();
        push_condition(
            &mut qb,
            &EVENT_FIELDS,
            "endDate",
            "<=",
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 30)),
        )
        .unwrap();
        push_order(&mut qb, &EVENT_FIELDS, "startDate", "ASC").unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM events WHERE TRUE AND region_id = $1 AND end_date <= $2 \
             ORDER BY start_date ASC"
        );
    }

    #[test]
    fn test_unmapped_field_is_rejected() {
        let result = update_returning(
            &HOLIDAY_FIELDS,
            1,
            vec![("isHoliday", FieldValue::Flag(true))],
        );
        assert!(matches!(result, Err(StorageError::UnmappedField { .. })));
    }
}
