use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant, Card, CardBody, CardHeader};
use crate::config::{MAX_FILE_SIZE_MB, MAX_UPLOAD_FILES};
use crate::services::upload_service::use_upload_service;
use crate::utils::formatting::format_file_size;

fn file_list_to_vec(list: web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Upload section: drop zone, staged-file list, and the submit button.
#[component]
pub fn UploadSection() -> impl IntoView {
    let upload = use_upload_service();
    let input_ref = NodeRef::<html::Input>::new();
    let drag_active = RwSignal::new(false);

    let open_picker = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let handle_change = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        if let Some(list) = input.files() {
            upload.stage(file_list_to_vec(list));
        }
        // Reset so picking the same file again still fires a change event.
        input.set_value("");
    };

    let handle_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        drag_active.set(false);
        if let Some(transfer) = evt.data_transfer() {
            if let Some(list) = transfer.files() {
                upload.stage(file_list_to_vec(list));
            }
        }
    };

    let dropzone_class = move || {
        if drag_active.get() {
            "border-2 border-dashed border-blue-500 bg-blue-900/20 rounded-lg p-10 text-center cursor-pointer transition-colors"
        } else {
            "border-2 border-dashed border-gray-600 hover:border-gray-500 rounded-lg p-10 text-center cursor-pointer transition-colors"
        }
    };

    view! {
        <div class="flex flex-col gap-4">
            <Card>
                <CardHeader>
                    <h2 class="text-lg font-semibold text-white">"Upload Documents"</h2>
                </CardHeader>
                <CardBody>
                    <div
                        class=dropzone_class
                        on:click=open_picker
                        on:dragover=move |evt: ev::DragEvent| {
                            evt.prevent_default();
                            drag_active.set(true);
                        }
                        on:dragleave=move |_| drag_active.set(false)
                        on:drop=handle_drop
                    >
                        <p class="text-gray-300">
                            "Drag and drop files here, or click to browse."
                        </p>
                        <p class="text-sm text-gray-500 mt-2">
                            {format!(
                                "PDF, DOCX, DOC or TXT. Up to {MAX_UPLOAD_FILES} files, {MAX_FILE_SIZE_MB} MB each."
                            )}
                        </p>
                        <input
                            node_ref=input_ref
                            type="file"
                            class="hidden"
                            multiple
                            accept=".pdf,.docx,.doc,.txt"
                            on:change=handle_change
                        />
                    </div>
                </CardBody>
            </Card>

            <Show when=move || upload.staged.with(|s| !s.is_empty())>
                <Card>
                    <CardHeader>
                        <h3 class="font-medium text-white">
                            {move || {
                                upload
                                    .staged
                                    .with(|s| format!("Selected files ({}/{MAX_UPLOAD_FILES})", s.len()))
                            }}
                        </h3>
                    </CardHeader>
                    <CardBody>
                        <ul class="flex flex-col gap-2">
                            {move || {
                                upload
                                    .staged
                                    .with(|staged| {
                                        staged
                                            .iter()
                                            .enumerate()
                                            .map(|(index, file)| {
                                                let name = file.meta.name.clone();
                                                let size = format_file_size(file.meta.size);
                                                view! {
                                                    <li class="flex items-center justify-between gap-2 p-2 rounded bg-gray-900 border border-gray-700">
                                                        <span class="text-gray-200 truncate">{name}</span>
                                                        <span class="text-sm text-gray-500 flex-shrink-0">{size}</span>
                                                        <Button
                                                            variant=ButtonVariant::Ghost
                                                            class="text-sm px-2 py-1"
                                                            title="Remove"
                                                            on_click=move |_| upload.remove(index)
                                                        >
                                                            "×"
                                                        </Button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </ul>
                        <div class="mt-4 flex justify-end">
                            <Button
                                loading=Signal::derive(move || upload.is_uploading.get())
                                disabled=Signal::derive(move || upload.is_uploading.get())
                                on_click=move |_| upload.submit()
                            >
                                "Upload"
                            </Button>
                        </div>
                    </CardBody>
                </Card>
            </Show>
        </div>
    }
}
