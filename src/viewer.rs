use crate::constants::{
    HIDE_CLASS, PRESET_ATTRIBUTE, PROGRESS_BAR_SELECTOR, UPDATE_BAR_SELECTOR, VIEWER_SELECTOR,
};
use crate::core::material::{loading_bar_width, loading_complete};
use crate::core::{CameraPose, MaterialFinish, Preset};
use crate::dom;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to the `<model-viewer>` element hosting the bike.
///
/// The element's camera and material APIs are plain JS properties, so they are
/// driven through `Reflect` rather than generated bindings.
#[derive(Clone)]
pub struct ModelViewer {
    el: web::HtmlElement,
}

impl ModelViewer {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let el = document
            .query_selector(VIEWER_SELECTOR)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing {}", VIEWER_SELECTOR))?;
        let el = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { el })
    }

    /// Camera preset requested by the page; unknown values fall back to the default.
    pub fn preset(&self) -> Preset {
        match self.el.get_attribute(PRESET_ATTRIBUTE) {
            None => Preset::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, Preset::default());
                Preset::default()
            }),
        }
    }

    pub fn apply_pose(&self, pose: &CameraPose) {
        self.set_prop("cameraOrbit", &pose.camera_orbit());
        self.set_prop("cameraTarget", &pose.camera_target());
        self.set_prop("fieldOfView", &pose.field_of_view());
    }

    fn set_prop(&self, name: &str, value: &str) {
        _ = Reflect::set(&self.el, &JsValue::from_str(name), &JsValue::from_str(value));
    }

    /// Repaint the first material with `finish` once the model has loaded.
    pub fn wire_material_on_load(&self, finish: MaterialFinish) {
        let host: JsValue = self.el.clone().into();
        let finish = finish.clamped();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            match apply_finish(&host, finish) {
                Ok(()) => log::info!(
                    "[viewer] finish applied metallic={:.2} roughness={:.2}",
                    finish.metallic,
                    finish.roughness
                ),
                Err(e) => log::warn!("[viewer] could not apply finish: {:?}", e),
            }
        }) as Box<dyn FnMut(_)>);
        _ = self
            .el
            .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Drive the in-viewer loading bar from `progress` events.
    pub fn wire_loading_bar(&self) {
        let host = self.el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let Some(total) = total_progress(&ev) else {
                return;
            };
            if let Some(bar) = dom::html_by_selector(&host, UPDATE_BAR_SELECTOR) {
                dom::set_style(&bar, "width", &loading_bar_width(total));
            }
            if loading_complete(total) {
                if let Some(wrapper) = dom::html_by_selector(&host, PROGRESS_BAR_SELECTOR) {
                    _ = wrapper.class_list().add_1(HIDE_CLASS);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = self
            .el
            .add_event_listener_with_callback("progress", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn total_progress(ev: &web::Event) -> Option<f64> {
    let detail = ev.dyn_ref::<web::CustomEvent>()?.detail();
    Reflect::get(&detail, &JsValue::from_str("totalProgress"))
        .ok()?
        .as_f64()
}

fn apply_finish(host: &JsValue, finish: MaterialFinish) -> Result<(), JsValue> {
    let model = Reflect::get(host, &JsValue::from_str("model"))?;
    let materials = Reflect::get(&model, &JsValue::from_str("materials"))?;
    let material = Reflect::get_u32(&materials, 0)?;
    if material.is_undefined() {
        return Err(JsValue::from_str("model has no materials"));
    }
    let pbr = Reflect::get(&material, &JsValue::from_str("pbrMetallicRoughness"))?;
    let [r, g, b, a] = finish.base_color.map(|c| JsValue::from_f64(c as f64));
    call_method(&pbr, "setBaseColorFactor", &Array::of4(&r, &g, &b, &a).into())?;
    call_method(
        &pbr,
        "setMetallicFactor",
        &JsValue::from_f64(finish.metallic as f64),
    )?;
    call_method(
        &pbr,
        "setRoughnessFactor",
        &JsValue::from_f64(finish.roughness as f64),
    )?;
    Ok(())
}

fn call_method(target: &JsValue, name: &str, arg: &JsValue) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call1(target, arg)
}
