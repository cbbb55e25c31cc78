use leptos::prelude::*;

use crate::config::{MAX_FILE_SIZE_MB, MAX_UPLOAD_FILES};

fn entries() -> Vec<(String, String)> {
    vec![
        (
            "What file types can I upload?".to_string(),
            "PDF, DOCX, DOC and TXT files are supported.".to_string(),
        ),
        (
            "How many files can I upload at once?".to_string(),
            format!(
                "Up to {MAX_UPLOAD_FILES} files per upload, each at most {MAX_FILE_SIZE_MB} MB."
            ),
        ),
        (
            "How does chatting with a document work?".to_string(),
            "Select a document in the Chat tab and ask questions about it. Answers are \
             generated from the document's content."
                .to_string(),
        ),
        (
            "Why did my chat transcript disappear?".to_string(),
            "The on-screen transcript belongs to the selected document and is cleared when \
             you pick a document. Past conversations are kept in the History tab."
                .to_string(),
        ),
        (
            "Can I delete my chat history?".to_string(),
            "Yes. The History tab lets you delete individual conversations or clear \
             everything at once."
                .to_string(),
        ),
    ]
}

/// FAQ section: a static accordion, one entry open at a time.
#[component]
pub fn FaqSection() -> impl IntoView {
    let open_index = RwSignal::new(None::<usize>);

    view! {
        <div class="flex flex-col gap-4">
            <h2 class="text-lg font-semibold text-white">"Frequently Asked Questions"</h2>
            <div class="flex flex-col gap-2">
                {entries()
                    .into_iter()
                    .enumerate()
                    .map(|(index, (question, answer))| {
                        let is_open = move || open_index.get() == Some(index);
                        let toggle = move |_| {
                            open_index.update(|open| {
                                *open = if *open == Some(index) { None } else { Some(index) };
                            });
                        };
                        view! {
                            <div class="rounded bg-gray-800 border border-gray-700">
                                <button
                                    class="w-full flex items-center justify-between gap-2 p-3 text-left text-gray-200 hover:text-white transition-colors"
                                    on:click=toggle
                                >
                                    <span class="font-medium">{question}</span>
                                    <span class="text-gray-500">
                                        {move || if is_open() { "−" } else { "+" }}
                                    </span>
                                </button>
                                <Show when=is_open>
                                    <p class="px-3 pb-3 text-sm text-gray-400">{answer.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
