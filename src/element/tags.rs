use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{build_element, Arg, Element};
use crate::error::BuilderError;

macro_rules! tags {
    ($($func:ident => $variant:ident),+ $(,)?) => {
        /// Every tag name with a factory function.
        ///
        /// Tag names are not checked against this list when building; it only
        /// backs the factories below.
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
        )]
        #[strum(serialize_all = "lowercase")]
        pub enum Tag {
            $($variant),+
        }

        $(
            #[doc = concat!("Builds a `<", stringify!($func), ">` element; see [build_element].")]
            pub fn $func<I>(args: I) -> Result<Element, BuilderError>
            where
                I: IntoIterator,
                I::Item: Into<Arg>,
            {
                Tag::$variant.build(args)
            }
        )+
    };
}

impl Tag {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn build<I>(self, args: I) -> Result<Element, BuilderError>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        build_element(self.name(), args)
    }
}

tags! {
    // Document metadata
    html => Html,
    base => Base,
    head => Head,
    link => Link,
    meta => Meta,
    style => Style,
    title => Title,
    // Sectioning
    body => Body,
    address => Address,
    article => Article,
    aside => Aside,
    footer => Footer,
    header => Header,
    h1 => H1,
    h2 => H2,
    h3 => H3,
    h4 => H4,
    h5 => H5,
    h6 => H6,
    main => Main,
    nav => Nav,
    section => Section,
    // Text content
    blockquote => Blockquote,
    dd => Dd,
    div => Div,
    dl => Dl,
    dt => Dt,
    figcaption => Figcaption,
    figure => Figure,
    hr => Hr,
    li => Li,
    menu => Menu,
    ol => Ol,
    p => P,
    pre => Pre,
    ul => Ul,
    // Inline text
    a => A,
    abbr => Abbr,
    b => B,
    bdi => Bdi,
    bdo => Bdo,
    br => Br,
    cite => Cite,
    code => Code,
    data => Data,
    dfn => Dfn,
    em => Em,
    i => I,
    kbd => Kbd,
    mark => Mark,
    q => Q,
    rp => Rp,
    rt => Rt,
    ruby => Ruby,
    s => S,
    samp => Samp,
    small => Small,
    span => Span,
    strong => Strong,
    sub => Sub,
    sup => Sup,
    time => Time,
    u => U,
    var => Var,
    wbr => Wbr,
    // Images and media
    area => Area,
    audio => Audio,
    img => Img,
    map => Map,
    track => Track,
    video => Video,
    // Embedded content
    embed => Embed,
    iframe => Iframe,
    object => Object,
    picture => Picture,
    portal => Portal,
    source => Source,
    svg => Svg,
    math => Math,
    // Scripting
    canvas => Canvas,
    noscript => Noscript,
    script => Script,
    // Edits
    del => Del,
    ins => Ins,
    // Tables
    caption => Caption,
    col => Col,
    colgroup => Colgroup,
    table => Table,
    tbody => Tbody,
    td => Td,
    tfoot => Tfoot,
    th => Th,
    thead => Thead,
    tr => Tr,
    // Forms
    button => Button,
    datalist => Datalist,
    fieldset => Fieldset,
    form => Form,
    input => Input,
    label => Label,
    legend => Legend,
    meter => Meter,
    optgroup => Optgroup,
    option => Option,
    output => Output,
    progress => Progress,
    select => Select,
    textarea => Textarea,
    // Interactive
    details => Details,
    dialog => Dialog,
    summary => Summary,
    // Web components
    slot => Slot,
    template => Template,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::args;

    #[test]
    fn test_names_are_lowercase() {
        for tag in Tag::iter() {
            assert_eq!(tag.name(), tag.name().to_lowercase());
            assert_eq!(tag.name().parse::<Tag>(), Ok(tag));
        }
        assert_eq!(Tag::H1.name(), "h1");
        assert_eq!(Tag::Figcaption.to_string(), "figcaption");
        let name: &str = Tag::Template.as_ref();
        assert_eq!(name, "template");
    }

    #[test]
    fn test_factories_set_tag() {
        assert_eq!(div(args![]).unwrap().tag(), "div");
        assert_eq!(template(args![]).unwrap().tag(), "template");
        assert_eq!(kbd(["ctrl"]).unwrap().tag(), "kbd");
        assert_eq!(table(args![]).unwrap().tag(), "table");
    }

    #[test]
    fn test_factory_strings_are_text() {
        let element = p(["hello"]).unwrap();

        assert_eq!(element.tag(), "p");
        assert_eq!(element.trivial_content(), Some("hello"));
    }

    #[test]
    fn test_unknown_tag_names() {
        assert!("blink".parse::<Tag>().is_err());
    }
}
