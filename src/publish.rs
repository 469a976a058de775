//! Issue publishing: create one tracked issue per descriptor, in order.

use crate::context::ServiceContext;
use crate::decompose::Decomposition;
use crate::error::Error;

/// Creates one tracked issue per descriptor and returns the tracker-assigned
/// numbers in creation order.
///
/// The batch is not transactional: a failure partway through aborts the
/// loop and leaves the issues already created in the tracker, reported only
/// by the per-creation log lines.
///
/// # Errors
///
/// Returns [`Error::CreateIssue`] on the first creation the tracker rejects.
pub fn publish(ctx: &ServiceContext, decomposition: &Decomposition) -> Result<Vec<u64>, Error> {
    let mut created = Vec::with_capacity(decomposition.issues.len());
    for descriptor in &decomposition.issues {
        let number = ctx
            .tracker
            .create_issue(&descriptor.title, &descriptor.body)
            .map_err(|e| Error::CreateIssue(e.to_string()))?;
        println!("Created issue #{number}: {}", descriptor.title);
        created.push(number);
    }
    Ok(created)
}
