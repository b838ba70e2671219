//! # Integration Test Flows
//!
//! Tests that the change-request workflow holds together end to end: the
//! service, the codec and validation, and the in-memory adapters wired the
//! way a boundary layer would wire them.
//!
//! ## Flows Tested
//!
//! 1. **Submit → Approve**: proposal lands on the profile, request turns
//!    terminal, listing reflects it
//! 2. **Submit → Reject**: reviewer reason recorded, profile untouched
//! 3. **Failure paths**: bad values and mangled payloads leave the request
//!    pending and the profile unchanged
//! 4. **Terminal-state guard**: a processed request refuses further review

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hr_profile_change::{
        ChangeRequest, ChangeRequestApi, ChangeRequestError, ChangeRequestParams,
        ChangeRequestService, ChangeRequestStore, ChangeSubmission, FieldValue,
        InMemoryChangeRequestStore, InMemoryProfileDirectory, ManualTimeSource, ProfileField,
        RequestStatus,
    };
    use shared_types::{EmployeeId, EmployeeProfile};
    use uuid::Uuid;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Workbench {
        service: ChangeRequestService<
            InMemoryChangeRequestStore,
            InMemoryProfileDirectory,
            ManualTimeSource,
        >,
        requests: Arc<InMemoryChangeRequestStore>,
        profiles: Arc<InMemoryProfileDirectory>,
        clock: Arc<ManualTimeSource>,
        employee: EmployeeId,
    }

    /// Wire the service over fresh in-memory adapters with one seeded
    /// employee, the way the boundary layer wires it per process.
    fn create_workbench() -> Workbench {
        let requests = Arc::new(InMemoryChangeRequestStore::new());
        let profiles = Arc::new(InMemoryProfileDirectory::new());
        let clock = Arc::new(ManualTimeSource::starting_at(1_000_000));

        let employee = Uuid::new_v4();
        profiles.insert(EmployeeProfile {
            id: employee,
            first_name: "Ana".to_string(),
            last_name: "Ibrahim".to_string(),
            national_id: "11111111111111".to_string(),
            primary_department_id: Some("dept-001".to_string()),
            work_type: Some("onSite".to_string()),
            date_of_hire: 1_600_000_000_000,
            ..Default::default()
        });

        let service = ChangeRequestService::new(
            Arc::clone(&requests),
            Arc::clone(&profiles),
            Arc::clone(&clock),
        );
        Workbench {
            service,
            requests,
            profiles,
            clock,
            employee,
        }
    }

    fn propose(employee: EmployeeId, field: &str, value: &str, reason: &str) -> ChangeSubmission {
        ChangeSubmission {
            subject_id: employee,
            field: field.to_string(),
            new_value: FieldValue::text(value),
            reason: reason.to_string(),
        }
    }

    // =============================================================================
    // SUBMIT → APPROVE
    // =============================================================================

    #[tokio::test]
    async fn test_full_approval_flow_updates_profile_and_listing() {
        let bench = create_workbench();

        let id = bench
            .service
            .submit(propose(
                bench.employee,
                "lastName",
                " El-Sayed ",
                "married name",
            ))
            .await
            .unwrap();

        bench.clock.advance(60_000);
        let outcome = bench.service.approve(id).await.unwrap();
        assert_eq!(outcome.field_updated, ProfileField::LastName);

        // Trimmed on the profile, echoed verbatim in the outcome.
        let profile = bench.profiles.get(bench.employee).unwrap();
        assert_eq!(profile.last_name, "El-Sayed");
        assert_eq!(outcome.new_value, FieldValue::text(" El-Sayed "));
        // Nothing else moved.
        assert_eq!(profile.first_name, "Ana");
        assert_eq!(profile.national_id, "11111111111111");

        let listed = bench.service.list_for_subject(bench.employee).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, RequestStatus::Approved);
        assert_eq!(listed[0].submitted_at, 1_000_000);
        assert_eq!(listed[0].processed_at, Some(1_060_000));
    }

    #[tokio::test]
    async fn test_department_transfer_request_flow() {
        let bench = create_workbench();

        let id = bench
            .service
            .submit(propose(
                bench.employee,
                "primaryDepartmentId",
                "dept-042",
                "transferred to data platform",
            ))
            .await
            .unwrap();

        bench.service.approve(id).await.unwrap();
        assert_eq!(
            bench
                .profiles
                .get(bench.employee)
                .unwrap()
                .primary_department_id
                .as_deref(),
            Some("dept-042")
        );
    }

    #[tokio::test]
    async fn test_national_id_approval_is_verbatim() {
        let bench = create_workbench();
        let id = bench
            .service
            .submit(propose(
                bench.employee,
                "nationalId",
                "12345678901234",
                "issued replacement id",
            ))
            .await
            .unwrap();

        bench.service.approve(id).await.unwrap();
        assert_eq!(
            bench.profiles.get(bench.employee).unwrap().national_id,
            "12345678901234"
        );
    }

    // =============================================================================
    // SUBMIT → REJECT
    // =============================================================================

    #[tokio::test]
    async fn test_rejection_records_reason_and_spares_profile() {
        let bench = create_workbench();
        let id = bench
            .service
            .submit(propose(
                bench.employee,
                "firstName",
                "Anna",
                "prefer this spelling",
            ))
            .await
            .unwrap();

        bench.clock.advance(5_000);
        bench.service.reject(id, "duplicate").await.unwrap();

        let listed = bench.service.list_for_subject(bench.employee).await.unwrap();
        assert_eq!(listed[0].status, RequestStatus::Rejected);
        assert_eq!(listed[0].reason, "duplicate");
        assert_eq!(listed[0].processed_at, Some(1_005_000));
        // The proposal never reached the profile.
        assert_eq!(bench.profiles.get(bench.employee).unwrap().first_name, "Ana");
    }

    // =============================================================================
    // FAILURE PATHS LEAVE EVERYTHING PENDING
    // =============================================================================

    #[tokio::test]
    async fn test_invalid_national_id_then_resubmit_corrected() {
        let bench = create_workbench();

        let bad = bench
            .service
            .submit(propose(bench.employee, "nationalId", "1234", "typo"))
            .await
            .unwrap();
        let err = bench.service.approve(bad).await.unwrap_err();
        assert!(matches!(err, ChangeRequestError::InvalidNationalId(_)));

        // Still pending and retryable; the reviewer rejects it and the
        // submitter tries again with a corrected value.
        let listed = bench.service.list_for_subject(bench.employee).await.unwrap();
        assert_eq!(listed[0].status, RequestStatus::Pending);

        bench.service.reject(bad, "not a valid id").await.unwrap();
        bench.clock.advance(1_000);

        let good = bench
            .service
            .submit(propose(
                bench.employee,
                "nationalId",
                "98765432109876",
                "corrected",
            ))
            .await
            .unwrap();
        bench.service.approve(good).await.unwrap();

        assert_eq!(
            bench.profiles.get(bench.employee).unwrap().national_id,
            "98765432109876"
        );
    }

    #[tokio::test]
    async fn test_unsupported_field_leaves_request_actionable() {
        let bench = create_workbench();
        let id = bench
            .service
            .submit(propose(
                bench.employee,
                "unknownThing",
                "whatever",
                "hopeful",
            ))
            .await
            .unwrap();

        let err = bench.service.approve(id).await.unwrap_err();
        assert!(matches!(err, ChangeRequestError::UnsupportedField(_)));

        // The reviewer can still reject it properly.
        bench.service.reject(id, "field cannot be changed").await.unwrap();
        let listed = bench.service.list_for_subject(bench.employee).await.unwrap();
        assert_eq!(listed[0].status, RequestStatus::Rejected);
    }

    #[tokio::test]
    async fn test_mangled_stored_payload_is_repaired_at_review() {
        let bench = create_workbench();

        // Plant a payload mangled the way intermediate layers mangle them:
        // embedded line breaks and padded separators.
        let request = ChangeRequest::new(ChangeRequestParams {
            request_id: Uuid::new_v4(),
            subject_id: bench.employee,
            encoded_change: "{\n \"field\" : \"firstName\",\n \"newValue\" : \"Mona\" \n}"
                .to_string(),
            reason: "imported from legacy system".to_string(),
            submitted_at: 999_000,
        });
        let id = bench.requests.insert(request).await.unwrap();

        let outcome = bench.service.approve(id).await.unwrap();
        assert_eq!(outcome.new_value, FieldValue::text("Mona"));
        assert_eq!(bench.profiles.get(bench.employee).unwrap().first_name, "Mona");
    }

    #[tokio::test]
    async fn test_unreadable_payload_never_mutates() {
        let bench = create_workbench();
        let request = ChangeRequest::new(ChangeRequestParams {
            request_id: Uuid::new_v4(),
            subject_id: bench.employee,
            encoded_change: "field=firstName;newValue=Mona".to_string(),
            reason: "imported from legacy system".to_string(),
            submitted_at: 999_000,
        });
        let id = bench.requests.insert(request).await.unwrap();

        let err = bench.service.approve(id).await.unwrap_err();
        assert!(matches!(err, ChangeRequestError::MalformedPayload { .. }));

        let stored = bench.requests.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
        assert!(stored.processed_at.is_none());
        assert_eq!(bench.profiles.get(bench.employee).unwrap().first_name, "Ana");
    }

    // =============================================================================
    // TERMINAL-STATE GUARD
    // =============================================================================

    #[tokio::test]
    async fn test_processed_request_refuses_further_review() {
        let bench = create_workbench();
        let id = bench
            .service
            .submit(propose(bench.employee, "workType", "remote", "moved abroad"))
            .await
            .unwrap();

        bench.service.approve(id).await.unwrap();

        let again = bench.service.approve(id).await.unwrap_err();
        assert!(matches!(
            again,
            ChangeRequestError::TransitionConflict {
                current: RequestStatus::Approved,
                ..
            }
        ));
        let reject = bench.service.reject(id, "retracting").await.unwrap_err();
        assert!(matches!(reject, ChangeRequestError::TransitionConflict { .. }));

        // One transition, one processed_at, reason untouched.
        let stored = bench.requests.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Approved);
        assert_eq!(stored.reason, "moved abroad");
    }

    #[tokio::test]
    async fn test_listing_orders_across_mixed_outcomes() {
        let bench = create_workbench();

        bench.clock.set(3_000_000);
        let approved = bench
            .service
            .submit(propose(bench.employee, "firstName", "Dina", "first"))
            .await
            .unwrap();
        bench.clock.set(1_000_000);
        let rejected = bench
            .service
            .submit(propose(bench.employee, "lastName", "X", "second"))
            .await
            .unwrap();
        bench.clock.set(5_000_000);
        let pending = bench
            .service
            .submit(propose(bench.employee, "workType", "hybrid", "third"))
            .await
            .unwrap();

        bench.service.approve(approved).await.unwrap();
        bench.service.reject(rejected, "too short").await.unwrap();

        let listed = bench.service.list_for_subject(bench.employee).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|row| row.request_id).collect();
        assert_eq!(ids, vec![pending, approved, rejected]);
        assert_eq!(listed[0].status, RequestStatus::Pending);
        assert_eq!(listed[1].status, RequestStatus::Approved);
        assert_eq!(listed[2].status, RequestStatus::Rejected);
    }
}
