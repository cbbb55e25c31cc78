use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::{
    ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_FILE_SIZE_BYTES, MAX_FILE_SIZE_MB,
    MAX_UPLOAD_FILES,
};
use crate::services::chat_session_service::ChatSessionService;
use crate::services::confirm_service::ConfirmState;
use crate::services::navigation_service::{NavigationState, Section};
use crate::services::notification_service::{NotificationState, Severity, VALIDATION_NOTICE_MS};
use crate::utils::formatting::format_file_size;

/// What the stager needs to know about a file, separated from the browser
/// `File` handle so staging decisions stay headless.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedMeta {
    pub name: String,
    pub size: f64,
    pub mime: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    TooLarge,
    UnsupportedType,
    Duplicate,
}

/// Outcome of offering a batch of candidate files to the stager. Indices
/// refer into the candidate slice.
#[derive(Debug, Default, PartialEq)]
pub struct StagingPlan {
    pub accepted: Vec<usize>,
    pub rejected: Vec<(usize, RejectReason)>,
    pub overflow: usize,
}

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Decides which candidates join the staging set:
/// size within the ceiling, extension or MIME in the allow-list, no
/// duplicate (name, size) against staged files or earlier candidates, and
/// room left under the staged-file cap. Overflow beyond capacity is counted
/// rather than reported per file.
pub fn plan_staging(existing: &[StagedMeta], candidates: &[StagedMeta]) -> StagingPlan {
    let mut plan = StagingPlan::default();
    let mut seen: Vec<(&str, f64)> = existing.iter().map(|m| (m.name.as_str(), m.size)).collect();
    let mut capacity = MAX_UPLOAD_FILES.saturating_sub(existing.len());

    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.size > MAX_FILE_SIZE_BYTES {
            plan.rejected.push((idx, RejectReason::TooLarge));
            continue;
        }
        let ext_ok = extension(&candidate.name)
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
        let mime_ok = ALLOWED_MIME_TYPES.contains(&candidate.mime.as_str());
        if !ext_ok && !mime_ok {
            plan.rejected.push((idx, RejectReason::UnsupportedType));
            continue;
        }
        if seen
            .iter()
            .any(|(name, size)| *name == candidate.name && *size == candidate.size)
        {
            plan.rejected.push((idx, RejectReason::Duplicate));
            continue;
        }
        if capacity == 0 {
            plan.overflow += 1;
            continue;
        }
        capacity -= 1;
        seen.push((candidate.name.as_str(), candidate.size));
        plan.accepted.push(idx);
    }
    plan
}

/// A staged file: validated metadata plus the browser handle submitted later.
#[derive(Clone)]
pub struct StagedFile {
    pub meta: StagedMeta,
    pub file: web_sys::File,
}

/// Client-held set of files queued for upload, capped at
/// [`MAX_UPLOAD_FILES`].
#[derive(Clone, Copy)]
pub struct UploadService {
    pub staged: RwSignal<Vec<StagedFile>, LocalStorage>,
    pub is_uploading: RwSignal<bool>,
    notices: NotificationState,
    confirm: ConfirmState,
    chat: ChatSessionService,
    nav: NavigationState,
}

impl UploadService {
    pub fn new(
        notices: NotificationState,
        confirm: ConfirmState,
        chat: ChatSessionService,
        nav: NavigationState,
    ) -> Self {
        Self {
            staged: RwSignal::new_local(Vec::new()),
            is_uploading: RwSignal::new(false),
            notices,
            confirm,
            chat,
            nav,
        }
    }

    /// Offers candidate files to the staging set, surfacing one notice per
    /// rejected file and a single aggregate notice for capacity overflow.
    pub fn stage(&self, files: Vec<web_sys::File>) {
        let candidates: Vec<StagedMeta> = files
            .iter()
            .map(|f| StagedMeta {
                name: f.name(),
                size: f.size(),
                mime: f.type_(),
            })
            .collect();
        let existing: Vec<StagedMeta> = self
            .staged
            .with_untracked(|staged| staged.iter().map(|f| f.meta.clone()).collect());

        let plan = plan_staging(&existing, &candidates);

        for (idx, reason) in &plan.rejected {
            let meta = &candidates[*idx];
            let message = match reason {
                RejectReason::TooLarge => format!(
                    "File \"{}\" ({}) exceeds the {} MB limit.",
                    meta.name,
                    format_file_size(meta.size),
                    MAX_FILE_SIZE_MB
                ),
                RejectReason::UnsupportedType => format!(
                    "File type of \"{}\" is not supported. Only PDF, DOCX, DOC, TXT.",
                    meta.name
                ),
                RejectReason::Duplicate => format!("\"{}\" is already staged.", meta.name),
            };
            self.notices
                .notify(Severity::Error, message, VALIDATION_NOTICE_MS);
        }
        if plan.overflow > 0 {
            self.notices.notify(
                Severity::Info,
                format!(
                    "A maximum of {MAX_UPLOAD_FILES} files can be staged; {} not added.",
                    plan.overflow
                ),
                VALIDATION_NOTICE_MS,
            );
        }
        if !plan.accepted.is_empty() {
            self.staged.update(|staged| {
                for idx in &plan.accepted {
                    staged.push(StagedFile {
                        meta: candidates[*idx].clone(),
                        file: files[*idx].clone(),
                    });
                }
            });
        }
    }

    pub fn remove(&self, index: usize) {
        self.staged.update(|staged| {
            if index < staged.len() {
                staged.remove(index);
            }
        });
    }

    /// Transmits all staged files as one multipart request. Success clears
    /// staging and offers to jump straight into chat with the first created
    /// document; failure leaves staging untouched so the user can retry.
    pub fn submit(&self) {
        if self.staged.with_untracked(|s| s.is_empty()) {
            self.notices.info("No files selected for upload.");
            return;
        }
        if self.is_uploading.get_untracked() {
            return;
        }

        let form = match web_sys::FormData::new() {
            Ok(form) => form,
            Err(_) => {
                self.notices.error("Could not prepare the upload request.");
                return;
            }
        };
        let append_failed = self.staged.with_untracked(|staged| {
            staged
                .iter()
                .any(|f| form.append_with_blob("files", &f.file).is_err())
        });
        if append_failed {
            self.notices.error("Could not prepare the upload request.");
            return;
        }

        self.is_uploading.set(true);
        let service = *self;
        spawn_local(async move {
            match api::documents::upload_documents(form).await {
                Ok(response) => {
                    service.notices.success(format!(
                        "{} document(s) uploaded. {}",
                        response.uploaded_documents.len(),
                        response.message
                    ));
                    service.staged.set(Vec::new());

                    if let Some(first) = response.uploaded_documents.first() {
                        let id = first.document_id.clone();
                        let filename = first.filename.clone();
                        let chat = service.chat;
                        let nav = service.nav;
                        service.confirm.request(
                            "Upload Complete",
                            format!(
                                "\"{filename}\" was uploaded. Chat with this document right away?"
                            ),
                            Arc::new(move || {
                                chat.activate(&id, &filename);
                                nav.navigate_to(Section::Chat);
                            }),
                        );
                    }
                }
                Err(err) => {
                    // Staging is left as-is so the user can retry.
                    service.notices.error(format!("Upload error: {err}"));
                }
            }
            service.is_uploading.set(false);
        });
    }
}

pub fn use_upload_service() -> UploadService {
    expect_context::<UploadService>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, size: f64, mime: &str) -> StagedMeta {
        StagedMeta {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    const MB: f64 = 1024.0 * 1024.0;

    #[test]
    fn test_accepts_small_pdf_rejects_oversized_docx() {
        let candidates = vec![
            meta("small.pdf", 2.0 * MB, "application/pdf"),
            meta(
                "big.docx",
                12.0 * MB,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
        ];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
        assert_eq!(plan.rejected, vec![(1, RejectReason::TooLarge)]);
        assert_eq!(plan.overflow, 0);
    }

    #[test]
    fn test_size_exactly_at_ceiling_is_accepted() {
        let candidates = vec![meta("edge.pdf", MAX_FILE_SIZE_BYTES, "application/pdf")];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
    }

    #[test]
    fn test_unknown_mime_but_known_extension_is_accepted() {
        let candidates = vec![meta("report.pdf", MB, "application/octet-stream")];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
    }

    #[test]
    fn test_known_mime_but_unknown_extension_is_accepted() {
        let candidates = vec![meta("notes.markdown", MB, "text/plain")];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
    }

    #[test]
    fn test_unknown_mime_and_extension_is_rejected() {
        let candidates = vec![meta("photo.png", MB, "image/png")];
        let plan = plan_staging(&[], &candidates);
        assert!(plan.accepted.is_empty());
        assert_eq!(plan.rejected, vec![(0, RejectReason::UnsupportedType)]);
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let candidates = vec![meta("REPORT.PDF", MB, "application/octet-stream")];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
    }

    #[test]
    fn test_duplicate_against_existing_staged_set() {
        let existing = vec![meta("a.pdf", MB, "application/pdf")];
        let candidates = vec![meta("a.pdf", MB, "application/pdf")];
        let plan = plan_staging(&existing, &candidates);
        assert_eq!(plan.rejected, vec![(0, RejectReason::Duplicate)]);
    }

    #[test]
    fn test_same_name_different_size_is_not_a_duplicate() {
        let existing = vec![meta("a.pdf", MB, "application/pdf")];
        let candidates = vec![meta("a.pdf", 2.0 * MB, "application/pdf")];
        let plan = plan_staging(&existing, &candidates);
        assert_eq!(plan.accepted, vec![0]);
    }

    #[test]
    fn test_duplicate_within_the_same_batch() {
        let candidates = vec![
            meta("a.pdf", MB, "application/pdf"),
            meta("a.pdf", MB, "application/pdf"),
        ];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
        assert_eq!(plan.rejected, vec![(1, RejectReason::Duplicate)]);
    }

    #[test]
    fn test_capacity_cap_counts_overflow() {
        let candidates: Vec<StagedMeta> = (0..7)
            .map(|i| meta(&format!("f{i}.pdf"), MB, "application/pdf"))
            .collect();
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted.len(), MAX_UPLOAD_FILES);
        assert_eq!(plan.overflow, 2);
        assert!(plan.rejected.is_empty());
    }

    #[test]
    fn test_capacity_accounts_for_already_staged_files() {
        let existing: Vec<StagedMeta> = (0..4)
            .map(|i| meta(&format!("staged{i}.pdf"), MB, "application/pdf"))
            .collect();
        let candidates = vec![
            meta("new1.pdf", MB, "application/pdf"),
            meta("new2.pdf", MB, "application/pdf"),
        ];
        let plan = plan_staging(&existing, &candidates);
        assert_eq!(plan.accepted, vec![0]);
        assert_eq!(plan.overflow, 1);
    }

    #[test]
    fn test_rejected_files_do_not_consume_capacity() {
        let mut candidates = vec![meta("huge.pdf", 20.0 * MB, "application/pdf")];
        candidates.extend((0..5).map(|i| meta(&format!("ok{i}.pdf"), MB, "application/pdf")));
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted.len(), 5);
        assert_eq!(plan.overflow, 0);
    }

    #[test]
    fn test_file_without_extension_falls_back_to_mime() {
        let candidates = vec![
            meta("README", MB, "text/plain"),
            meta("mystery", MB, "application/octet-stream"),
        ];
        let plan = plan_staging(&[], &candidates);
        assert_eq!(plan.accepted, vec![0]);
        assert_eq!(plan.rejected, vec![(1, RejectReason::UnsupportedType)]);
    }
}
