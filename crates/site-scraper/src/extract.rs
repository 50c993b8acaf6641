//! 字段提取
//!
//! 从单个候选节点中提取标题、图片和链接。每个字段都有固定的回退顺序，
//! 取到第一个非空值为止。

use crate::selectors::{IMAGE_SELECTOR, LINK_SELECTOR, TITLE_SELECTOR};
use scraper::ElementRef;
use url::Url;

/// 标题的最后一级回退
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleFallback {
    /// 没有标题属性和标题元素时放弃
    None,
    /// 使用整个节点的可见文本
    NodeText,
}

/// 将页面中的 `href` / `src` 转换为绝对地址
///
/// - 以 `/` 开头：直接拼接在 `base` 后面
/// - 已经是带协议的绝对地址：原样返回
/// - 其他相对路径：拼接为 `base/href`
pub fn resolve_url(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with('/') {
        format!("{base}{href}")
    } else if Url::parse(href).is_ok() {
        href.to_string()
    } else {
        format!("{base}/{href}")
    }
}

/// 节点的可见文本：每段文本去掉首尾空白后直接拼接
///
/// 段与段之间不插入空格：`<h3>Ремонт <i>чаши</i></h3>` 得到 `Ремонтчаши`。
pub fn visible_text(node: ElementRef<'_>) -> String {
    node.text().map(str::trim).collect()
}

/// 提取标题
///
/// 优先级：
/// 1. 节点自身的 `title` 属性
/// 2. 第一个 `.title` / `h3` / `h2` 子元素的文本
/// 3. `fallback` 为 [`TitleFallback::NodeText`] 时，节点的全部可见文本
pub fn extract_title(node: ElementRef<'_>, fallback: TitleFallback) -> Option<String> {
    if let Some(title) = non_blank(node.value().attr("title")) {
        return Some(title);
    }

    if let Some(heading) = node.select(&TITLE_SELECTOR).next() {
        let text = visible_text(heading);
        if !text.is_empty() {
            return Some(text);
        }
    }

    match fallback {
        TitleFallback::NodeText => Some(visible_text(node)).filter(|t| !t.is_empty()),
        TitleFallback::None => None,
    }
}

/// 第一个 `img` 子元素的 `src`，转换为绝对地址
pub fn extract_image(node: ElementRef<'_>, base: &str) -> Option<String> {
    let img = node.select(&IMAGE_SELECTOR).next()?;
    non_blank(img.value().attr("src")).map(|src| resolve_url(base, &src))
}

/// 节点本身是 `<a>` 时取自己的 `href`，否则取第一个 `<a>` 子元素的 `href`
///
/// 返回的是页面中的原始值，需要再经过 [`resolve_url`]。
pub fn extract_link(node: ElementRef<'_>) -> Option<String> {
    if node.value().name() == "a" {
        return non_blank(node.value().attr("href"));
    }
    let link = node.select(&LINK_SELECTOR).next()?;
    non_blank(link.value().attr("href"))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    const BASE: &str = "https://kupi-bassein.ru";

    /// 解析HTML片段并对第一个 `.card` 执行 `f`
    fn with_card<T>(html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(".card").unwrap();
        let card = fragment.select(&selector).next().expect("test html has a .card");
        f(card)
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(resolve_url(BASE, "/portfolio/1"), "https://kupi-bassein.ru/portfolio/1");
        assert_eq!(resolve_url(BASE, "http://x.com/a"), "http://x.com/a");
        assert_eq!(resolve_url(BASE, "foo"), "https://kupi-bassein.ru/foo");
        assert_eq!(resolve_url(BASE, "  /img/a.jpg "), "https://kupi-bassein.ru/img/a.jpg");
    }

    #[test]
    fn test_title_attribute_wins() {
        let html = r#"<div class="card" title=" Бассейн в Сочи "><h3>Другой</h3></div>"#;
        let title = with_card(html, |card| extract_title(card, TitleFallback::None));
        assert_eq!(title.as_deref(), Some("Бассейн в Сочи"));
    }

    #[test]
    fn test_title_from_first_heading() {
        let html = r#"
            <div class="card" title="   ">
                <h2>Второй</h2>
                <span class="title"> Композитный <b>бассейн</b> </span>
            </div>
        "#;
        let title = with_card(html, |card| extract_title(card, TitleFallback::None));
        assert_eq!(title.as_deref(), Some("Второй"));

        let nested = r#"<div class="card"><span class="title"> Композитный <b>бассейн</b> </span></div>"#;
        let title = with_card(nested, |card| extract_title(card, TitleFallback::None));
        assert_eq!(title.as_deref(), Some("Композитныйбассейн"));
    }

    #[test]
    fn test_title_node_text_fallback_only_when_allowed() {
        let html = r#"<a class="card" href="/services/remont"> Ремонт <i>чаши</i> </a>"#;

        assert_eq!(with_card(html, |card| extract_title(card, TitleFallback::None)), None);
        assert_eq!(
            with_card(html, |card| extract_title(card, TitleFallback::NodeText)).as_deref(),
            Some("Ремонтчаши")
        );
    }

    #[test]
    fn test_title_blank_everywhere() {
        let html = r#"<div class="card"><h3>  </h3><img src="/a.png"></div>"#;
        assert_eq!(with_card(html, |card| extract_title(card, TitleFallback::NodeText)), None);
    }

    #[test]
    fn test_extract_image() {
        let html = r#"<div class="card"><img src="/upload/a.jpg"><img src="/upload/b.jpg"></div>"#;
        assert_eq!(
            with_card(html, |card| extract_image(card, BASE)).as_deref(),
            Some("https://kupi-bassein.ru/upload/a.jpg")
        );

        let relative = r#"<div class="card"><img src="img/a.jpg"></div>"#;
        assert_eq!(
            with_card(relative, |card| extract_image(card, BASE)).as_deref(),
            Some("https://kupi-bassein.ru/img/a.jpg")
        );

        assert_eq!(with_card(r#"<div class="card"><p>нет</p></div>"#, |card| extract_image(card, BASE)), None);
    }

    #[test]
    fn test_extract_link() {
        let own = r#"<a class="card" href="/portfolio/1"><span><a href="/other">x</a></span></a>"#;
        assert_eq!(with_card(own, extract_link).as_deref(), Some("/portfolio/1"));

        let nested = r#"<div class="card"><p><a href="/portfolio/2">x</a></p><a href="/portfolio/3">y</a></div>"#;
        assert_eq!(with_card(nested, extract_link).as_deref(), Some("/portfolio/2"));

        let anchor_without_href = r#"<div class="card"><a name="top">x</a><a href="/portfolio/4">y</a></div>"#;
        assert_eq!(with_card(anchor_without_href, extract_link), None);

        assert_eq!(with_card(r#"<div class="card">нет ссылки</div>"#, extract_link), None);
    }
}
