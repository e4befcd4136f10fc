//! Per-tenant grouping of expiring memberships.

use uuid::Uuid;

use seatbook_entity::membership::ExpiringMembership;

/// One tenant's pending reminder: every expiring membership in their
/// library folded into a single push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantBatch {
    /// The library this batch belongs to.
    pub library_id: Uuid,
    /// The owner's push token.
    pub push_token: String,
    /// How many memberships are expiring.
    pub count: usize,
    /// Sum of the expiring memberships' fees, in whole rupees.
    pub renewal_amount: i64,
    /// The memberships folded into this batch, for dedup logging.
    pub membership_ids: Vec<Uuid>,
}

/// Group scan rows into one batch per library, preserving first-seen
/// library order.
///
/// Rows whose owner has notifications disabled or no registered token are
/// dropped; their memberships receive no log row and are picked up again
/// once the owner opts in.
pub fn plan_batches(rows: &[ExpiringMembership]) -> Vec<TenantBatch> {
    let mut batches: Vec<TenantBatch> = Vec::new();

    for row in rows {
        if !row.notifications_enabled {
            continue;
        }
        let Some(token) = row.push_token.as_deref() else {
            continue;
        };

        match batches.iter_mut().find(|b| b.library_id == row.library_id) {
            Some(batch) => {
                batch.count += 1;
                batch.renewal_amount += row.total_fee;
                batch.membership_ids.push(row.membership_id);
            }
            None => batches.push(TenantBatch {
                library_id: row.library_id,
                push_token: token.to_string(),
                count: 1,
                renewal_amount: row.total_fee,
                membership_ids: vec![row.membership_id],
            }),
        }
    }

    batches
}

/// The (title, body) pair for one tenant's reminder push.
pub fn render_message(batch: &TenantBatch, horizon_days: i64) -> (String, String) {
    let title = "Upcoming Membership Renewals".to_string();
    let noun = if batch.count == 1 {
        "membership expires"
    } else {
        "memberships expire"
    };
    let body = format!(
        "{} {} within {} days. Expected renewal amount: ₹{}",
        batch.count, noun, horizon_days, batch.renewal_amount
    );
    (title, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn row(
        library_id: Uuid,
        fee: i64,
        token: Option<&str>,
        enabled: bool,
    ) -> ExpiringMembership {
        ExpiringMembership {
            membership_id: Uuid::new_v4(),
            library_id,
            total_fee: fee,
            end_date: Utc::now() + Duration::days(3),
            push_token: token.map(str::to_string),
            notifications_enabled: enabled,
        }
    }

    #[test]
    fn test_groups_per_library_with_summed_amounts() {
        let lib_a = Uuid::new_v4();
        let lib_b = Uuid::new_v4();
        let rows = vec![
            row(lib_a, 1000, Some("tok-a"), true),
            row(lib_b, 500, Some("tok-b"), true),
            row(lib_a, 700, Some("tok-a"), true),
        ];

        let batches = plan_batches(&rows);
        assert_eq!(batches.len(), 2);

        assert_eq!(batches[0].library_id, lib_a);
        assert_eq!(batches[0].count, 2);
        assert_eq!(batches[0].renewal_amount, 1700);
        assert_eq!(batches[0].membership_ids.len(), 2);

        assert_eq!(batches[1].library_id, lib_b);
        assert_eq!(batches[1].count, 1);
        assert_eq!(batches[1].renewal_amount, 500);
    }

    #[test]
    fn test_one_tenant_never_sees_another_tenants_memberships() {
        let lib_a = Uuid::new_v4();
        let lib_b = Uuid::new_v4();
        let rows = vec![
            row(lib_a, 1000, Some("tok-a"), true),
            row(lib_b, 500, Some("tok-b"), true),
        ];
        let a_ids: Vec<Uuid> = rows
            .iter()
            .filter(|r| r.library_id == lib_a)
            .map(|r| r.membership_id)
            .collect();

        let batches = plan_batches(&rows);
        let batch_b = batches.iter().find(|b| b.library_id == lib_b).unwrap();
        assert!(batch_b.membership_ids.iter().all(|id| !a_ids.contains(id)));
    }

    #[test]
    fn test_disabled_or_tokenless_owners_are_skipped() {
        let lib = Uuid::new_v4();
        let rows = vec![
            row(lib, 1000, None, true),
            row(lib, 500, Some("tok"), false),
        ];
        assert!(plan_batches(&rows).is_empty());
    }

    #[test]
    fn test_message_body_carries_count_and_amount() {
        let batch = TenantBatch {
            library_id: Uuid::new_v4(),
            push_token: "tok".into(),
            count: 3,
            renewal_amount: 4500,
            membership_ids: vec![Uuid::new_v4(); 3],
        };
        let (title, body) = render_message(&batch, 7);
        assert_eq!(title, "Upcoming Membership Renewals");
        assert!(body.contains('3'));
        assert!(body.contains("4500"));
        assert!(body.contains("7 days"));
    }

    #[test]
    fn test_singular_message_for_one_membership() {
        let batch = TenantBatch {
            library_id: Uuid::new_v4(),
            push_token: "tok".into(),
            count: 1,
            renewal_amount: 800,
            membership_ids: vec![Uuid::new_v4()],
        };
        let (_, body) = render_message(&batch, 7);
        assert!(body.contains("membership expires"));
    }
}
