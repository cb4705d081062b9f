use super::*;
use crate::messages::*;

fn init_tracing() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .try_init();
}

fn output(input: &str, options: &Options) -> String {
    init_tracing();
    format_text_with_options(input, options.clone()).result
}

/// Warnings flattened to `(index + length, target, message)`, which puts
/// the caret right after the judged span.
fn warnings(input: &str, options: &Options) -> Vec<(usize, ValidationTarget, &'static str)> {
    init_tracing();
    format_text_with_options(input, options.clone())
        .validations
        .into_iter()
        .map(|v| (v.index + v.length, v.target, v.message))
        .collect()
}

const CORPUS: &[&str] = &[
    "Vue (读音 /vjuː/，类似于 view) 是一套构建用户界面的渐进式框架",
    "Chrome 顶部导航 > 窗口 > 任务管理",
    "# 简介 {#introduction}",
    "### 托管模式 {#takeover-mode}",
    "how many users' items here",
    "what's going on",
    "1+1=2 且 a || b",
    "https://vuejs.org 与 www.vuejs.org",
    "> foo  \n  > bar \n  > baz",
    "xxx `foo` xxx，中文“你好”。",
];

#[test]
fn unset_options_reproduce_the_input() {
    for &input in CORPUS {
        let out = format_text(input);
        assert_eq!(out.result, input);
        assert_eq!(out.validations, []);
    }
    assert_eq!(output(" `foo` \"foo\" ", &Options::default()), " `foo` \"foo\" ");
}

#[test]
fn standard_ruleset_is_idempotent() {
    let options = Options::standard();
    for &input in CORPUS {
        let once = output(input, &options);
        let again = format_text_with_options(&once, options.clone());
        assert_eq!(again.result, once, "for {input:?}");
        assert_eq!(again.validations, [], "for {input:?}");
    }
}

#[test]
fn validations_point_into_the_original_input() {
    let input = "  你好,再见. ** foo ** `x`,中文 ";
    let out = format_text_with_options(input, Options::standard());
    let len = input.chars().count();
    for v in &out.validations {
        assert!(v.index + v.length <= len, "{v:?} out of bounds");
    }
}

#[test]
fn trim_the_spaces() {
    let options = Options {
        trim_space: Some(true),
        ..Default::default()
    };
    assert_eq!(output(" `foo` \"foo\" ", &options), "`foo` \"foo\"");
    assert_eq!(output(" foo bar   ", &options), "foo bar");
    assert_eq!(output("中文, 中文. ", &options), "中文, 中文.");
    assert_eq!(output("中文, 中文.中； 文。 ", &options), "中文, 中文.中； 文。");
    assert_eq!(output(" \" bar \" ", &options), "\" bar \"");
    assert_eq!(output(" (bar) ", &options), "(bar)");
}

#[test]
fn space_inside_emphasis_marks() {
    let options = Options {
        no_space_inside_mark: Some(true),
        ..Default::default()
    };
    assert_eq!(output("x ** yyy ** z", &options), "x **yyy** z");
    assert_eq!(
        warnings("x ** yyy ** z", &options),
        [
            (4, ValidationTarget::SpaceAfter, MARK_NOSPACE_INSIDE),
            (8, ValidationTarget::SpaceAfter, MARK_NOSPACE_INSIDE),
        ]
    );
    assert_eq!(output("x _** yyy ** _ z", &options), "x _**yyy**_ z");
    assert_eq!(output("x _ ** yyy **_ z", &options), "x _**yyy**_ z");
    assert_eq!(output("_ ** yyy **_", &options), "_**yyy**_");
}

#[test]
fn space_outside_code_spans() {
    let options = Options {
        space_outside_code: Some(true),
        ..Default::default()
    };
    assert_eq!(output("xxx`foo`xxx", &options), "xxx `foo` xxx");
    assert_eq!(
        warnings("xxx`foo`xxx", &options),
        [
            (3, ValidationTarget::SpaceAfter, CODE_SPACE_OUTSIDE),
            (8, ValidationTarget::SpaceAfter, CODE_SPACE_OUTSIDE),
        ]
    );
    assert_eq!(output("xxx`foo` xxx", &options), "xxx `foo` xxx");
    assert_eq!(output("xxx `foo`xxx", &options), "xxx `foo` xxx");
    assert_eq!(output("xxx `foo` xxx", &options), "xxx `foo` xxx");
    // Whitespace inside the span is kept verbatim.
    assert_eq!(output("xxx ` foo`xxx", &options), "xxx ` foo` xxx");
    assert_eq!(
        warnings("xxx<code>foo</code>xxx", &options),
        [
            (3, ValidationTarget::SpaceAfter, CODE_SPACE_OUTSIDE),
            (19, ValidationTarget::SpaceAfter, CODE_SPACE_OUTSIDE),
        ]
    );
    assert_eq!(
        output("xxx<code>foo</code> xxx", &options),
        "xxx <code>foo</code> xxx"
    );
}

#[test]
fn no_space_outside_code_spans() {
    let options = Options {
        space_outside_code: Some(false),
        ..Default::default()
    };
    assert_eq!(output("xxx`foo`xxx", &options), "xxx`foo`xxx");
    assert_eq!(output("xxx`foo` xxx", &options), "xxx`foo`xxx");
    assert_eq!(output("xxx `foo`xxx", &options), "xxx`foo`xxx");
    assert_eq!(output("xxx `foo` xxx", &options), "xxx`foo`xxx");
    assert_eq!(
        output("xxx <code>foo</code> xxx", &options),
        "xxx<code>foo</code>xxx"
    );
}

fn width_options() -> Options {
    Options {
        half_width_punctuation: Some("()".into()),
        full_width_punctuation: Some("，。：；？！“”‘’".into()),
        ..Default::default()
    }
}

#[test]
fn punctuation_width_conversion() {
    let options = width_options();
    assert_eq!(output("你好,再见.", &options), "你好，再见。");
    assert_eq!(
        warnings("你好,再见.", &options),
        [
            (3, ValidationTarget::Content, PUNCTUATION_FULL_WIDTH),
            (6, ValidationTarget::Content, PUNCTUATION_FULL_WIDTH),
        ]
    );
    assert_eq!(output("你（好）,再见.", &options), "你(好)，再见。");
    assert_eq!(output("你'好',再见.", &options), "你‘好’，再见。");
    assert_eq!(output("你\"好\",再见.", &options), "你“好”，再见。");
    assert_eq!(output("\"你'好'\",再见.", &options), "“你‘好’”，再见。");
}

#[test]
fn bracket_width_conversion_moves_both_marks() {
    let options = Options {
        full_width_punctuation: Some("（）".into()),
        ..Default::default()
    };
    // No context gate for brackets: the pair converts together even when
    // only one side touches full-width content.
    assert_eq!(output("foo(bar)中", &options), "foo（bar）中");
    assert_eq!(
        warnings("foo(bar)中", &options),
        [
            (4, ValidationTarget::Content, PUNCTUATION_FULL_WIDTH),
            (8, ValidationTarget::Content, PUNCTUATION_FULL_WIDTH),
        ]
    );
    assert_eq!(output("(foo)", &options), "（foo）");
    let both = Options {
        half_width_punctuation: Some("()".into()),
        full_width_punctuation: Some("（）".into()),
        ..Default::default()
    };
    assert_eq!(output("foo(bar)中", &both), "foo(bar)中");
}

#[test]
fn width_conversion_needs_full_width_context() {
    let options = width_options();
    // The single quote in a shorthand never converts: it has no pair.
    assert_eq!(output("what's up", &options), "what's up");
    assert_eq!(output("foo, bar.", &options), "foo, bar.");
    assert_eq!(output("Vue.js 真好", &options), "Vue.js 真好");
}

#[test]
fn unify_quotes_to_simplified() {
    let options = Options {
        unified_punctuation: Some(PunctuationUnification::Simplified),
        ..Default::default()
    };
    let input = "老師說：「你們要記住國父說的『青年要立志做大事，不要做大官』這句話。」";
    assert_eq!(
        output(input, &options),
        "老師說：“你們要記住國父說的‘青年要立志做大事，不要做大官’這句話。”"
    );
    assert_eq!(
        warnings(input, &options),
        [
            (4, ValidationTarget::StartContent, PUNCTUATION_UNIFICATION_SIMPLIFIED),
            (34, ValidationTarget::EndContent, PUNCTUATION_UNIFICATION_SIMPLIFIED),
            (14, ValidationTarget::StartContent, PUNCTUATION_UNIFICATION_SIMPLIFIED),
            (29, ValidationTarget::EndContent, PUNCTUATION_UNIFICATION_SIMPLIFIED),
        ]
    );
}

#[test]
fn unify_quotes_to_traditional() {
    let options = Options {
        unified_punctuation: Some(PunctuationUnification::Traditional),
        ..Default::default()
    };
    assert_eq!(
        output(
            "老師說：“你們要記住國父說的‘青年要立志做大事，不要做大官’這句話。”",
            &options
        ),
        "老師說：「你們要記住國父說的『青年要立志做大事，不要做大官』這句話。」"
    );
}

#[test]
fn one_space_between_half_width_content() {
    let options = Options {
        space_between_half_width_content: Some(true),
        ..Default::default()
    };
    assert_eq!(output("foo bar   baz", &options), "foo bar baz");
    assert_eq!(
        warnings("foo bar   baz", &options),
        [(7, ValidationTarget::SpaceAfter, CONTENT_SPACE_HALF_WIDTH)]
    );
}

#[test]
fn no_space_between_full_width_content() {
    let options = Options {
        no_space_between_full_width_content: Some(true),
        ..Default::default()
    };
    assert_eq!(output("中文 中文 中 文", &options), "中文中文中文");
}

#[test]
fn space_between_mixed_width_content() {
    let with_space = Options {
        space_between_mixed_width_content: Some(true),
        ..Default::default()
    };
    assert_eq!(
        output("中文foo 中文 foo中foo文", &with_space),
        "中文 foo 中文 foo 中 foo 文"
    );
    let without_space = Options {
        space_between_mixed_width_content: Some(false),
        ..Default::default()
    };
    assert_eq!(
        output("中文foo 中文 foo中foo文", &without_space),
        "中文foo中文foo中foo文"
    );
}

#[test]
fn no_space_before_punctuation() {
    let options = Options {
        no_space_before_punctuation: Some(true),
        ..Default::default()
    };
    assert_eq!(output("中文 , 一. 二 ；三。四", &options), "中文, 一. 二；三。四");
    assert_eq!(
        warnings("中文 , 一. 二 ；三。四", &options),
        [
            (2, ValidationTarget::SpaceAfter, PUNCTUATION_NOSPACE_BEFORE),
            (9, ValidationTarget::SpaceAfter, PUNCTUATION_NOSPACE_BEFORE),
        ]
    );
    // The gap folds onto the quote mark, not into the pair.
    assert_eq!(output("foo, \" bar \" , baz", &options), "foo, \" bar \", baz");
    assert_eq!(output("foo. “ bar ” . baz", &options), "foo. “ bar ”. baz");
    assert_eq!(output("一， \" 二 \" ， 三", &options), "一， \" 二 \"， 三");
    assert_eq!(output("一。 “ 二 ” 。 三", &options), "一。 “ 二 ”。 三");
}

#[test]
fn one_space_after_half_width_punctuation() {
    let options = Options {
        space_after_half_width_punctuation: Some(true),
        ..Default::default()
    };
    assert_eq!(
        output("中文, 中文.中； 文。中文", &options),
        "中文, 中文. 中； 文。中文"
    );
    assert_eq!(output("foo,\" bar \" , baz", &options), "foo, \" bar \" , baz");
    assert_eq!(output("foo.“ bar ” . baz", &options), "foo. “ bar ” . baz");
}

#[test]
fn no_space_after_full_width_punctuation() {
    let options = Options {
        no_space_after_full_width_punctuation: Some(true),
        ..Default::default()
    };
    assert_eq!(
        output("中文, 中文.中； 文。中文", &options),
        "中文, 中文.中；文。中文"
    );
    assert_eq!(output("一， \" 二 \" ， 三", &options), "一，\" 二 \" ，三");
    assert_eq!(output("一。 “ 二 ” 。 三", &options), "一。“ 二 ” 。三");
}

#[test]
fn no_space_inside_quotes() {
    let options = Options {
        no_space_inside_quote: Some(true),
        ..Default::default()
    };
    assert_eq!(output("foo \" bar \" baz", &options), "foo \"bar\" baz");
    assert_eq!(
        warnings("foo \" bar \" baz", &options),
        [
            (5, ValidationTarget::InnerSpaceBefore, QUOTE_NOSPACE_INSIDE),
            (9, ValidationTarget::SpaceAfter, QUOTE_NOSPACE_INSIDE),
        ]
    );
    assert_eq!(output("foo “ bar ” baz", &options), "foo “bar” baz");
}

#[test]
fn space_outside_half_width_quotes() {
    let with_space = Options {
        space_outside_half_quote: Some(true),
        ..Default::default()
    };
    assert_eq!(output("foo \" bar \" baz", &with_space), "foo \" bar \" baz");
    assert_eq!(output("foo\"bar\"baz", &with_space), "foo \"bar\" baz");
    // Full-width pairs are another option's concern.
    assert_eq!(output("foo “ bar ” baz", &with_space), "foo “ bar ” baz");
    let without_space = Options {
        space_outside_half_quote: Some(false),
        ..Default::default()
    };
    assert_eq!(output("foo \" bar \" baz", &without_space), "foo\" bar \"baz");
    assert_eq!(output("一 \" 二 \" 三", &without_space), "一\" 二 \"三");
    assert_eq!(output("一 “ 二 ” 三", &without_space), "一 “ 二 ” 三");
}

#[test]
fn no_space_outside_full_width_quotes() {
    let options = Options {
        no_space_outside_full_quote: Some(true),
        ..Default::default()
    };
    assert_eq!(output("一 “ 二 ” 三", &options), "一“ 二 ”三");
    assert_eq!(output("foo “ bar ” baz", &options), "foo“ bar ”baz");
    // Curly quotes are width-ambiguous; the half-quote rule must not
    // reach them under the standard ruleset.
    assert_eq!(
        output("中文“你好”中文", &Options::standard()),
        "中文“你好”中文"
    );
}

#[test]
fn no_space_inside_brackets() {
    let options = Options {
        no_space_inside_bracket: Some(true),
        ..Default::default()
    };
    assert_eq!(warnings("foo (bar) baz", &options), []);
    assert_eq!(output("foo ( bar ) baz", &options), "foo (bar) baz");
    assert_eq!(
        warnings("foo ( bar ) baz", &options),
        [
            (5, ValidationTarget::SpaceAfter, BRACKET_NOSPACE_INSIDE),
            (9, ValidationTarget::SpaceAfter, BRACKET_NOSPACE_INSIDE),
        ]
    );
    assert_eq!(output("foo （ bar ） baz", &options), "foo （bar） baz");
}

#[test]
fn space_outside_half_width_brackets() {
    let with_space = Options {
        space_outside_half_bracket: Some(true),
        ..Default::default()
    };
    assert_eq!(output("foo(bar)baz", &with_space), "foo (bar) baz");
    assert_eq!(output("foo ( bar ) baz", &with_space), "foo ( bar ) baz");
    let without_space = Options {
        space_outside_half_bracket: Some(false),
        ..Default::default()
    };
    assert_eq!(output("foo(bar)baz", &without_space), "foo(bar)baz");
    assert_eq!(output("foo ( bar ) baz", &without_space), "foo( bar )baz");
}

#[test]
fn no_space_outside_full_width_brackets() {
    let options = Options {
        no_space_outside_full_bracket: Some(true),
        ..Default::default()
    };
    assert_eq!(output("foo （ bar ） baz", &options), "foo（ bar ）baz");
}

#[test]
fn keeps_linebreaks_and_the_spaces_before_them() {
    let input = "> foo  \n  > bar \n  > baz";
    assert_eq!(output(input, &Options::standard()), input);
}

#[test]
fn url_like_text_survives_the_standard_ruleset() {
    let options = Options::standard();
    assert_eq!(output("Vue.js 是什么", &options), "Vue.js 是什么");
    assert_eq!(output("www.vuejs.org", &options), "www.vuejs.org");
    assert_eq!(output("https://vuejs.org", &options), "https://vuejs.org");
    assert_eq!(
        output("想知道 Vue 与其它库/框架有哪些区别", &options),
        "想知道 Vue 与其它库/框架有哪些区别"
    );
    assert_eq!(
        output("Vue (读音 /vjuː/，类似于)", &options),
        "Vue (读音 /vjuː/，类似于)"
    );
}

#[test]
fn shorthand_quotes_survive_the_standard_ruleset() {
    let options = Options::standard();
    assert_eq!(output("how many user's here", &options), "how many user's here");
    assert_eq!(
        output("how many users' items here", &options),
        "how many users' items here"
    );
    assert_eq!(output("what's going on", &options), "what's going on");
}

#[test]
fn math_and_arrows_survive_the_standard_ruleset() {
    let options = Options::standard();
    assert_eq!(output("1+1=2", &options), "1+1=2");
    assert_eq!(output("a|b", &options), "a|b");
    assert_eq!(output("a | b", &options), "a | b");
    assert_eq!(output("a||b", &options), "a||b");
    assert_eq!(output("a || b", &options), "a || b");
    assert_eq!(
        output("Chrome 顶部导航 > 窗口 > 任务管理", &options),
        "Chrome 顶部导航 > 窗口 > 任务管理"
    );
}

#[test]
fn heading_anchors_survive_the_standard_ruleset() {
    let options = Options::standard();
    assert_eq!(output("# 简介 {#introduction}", &options), "# 简介 {#introduction}");
    assert_eq!(output("# 简介{#introduction}", &options), "# 简介 {#introduction}");
    assert_eq!(
        output("### 托管模式 {#takeover-mode}", &options),
        "### 托管模式 {#takeover-mode}"
    );
}

#[test]
fn standard_ruleset_full_sentence() {
    let options = Options::standard();
    assert_eq!(output("你好,再见.", &options), "你好，再见。");
    assert_eq!(output("你（好）,再见.", &options), "你 (好)，再见。");
    assert_eq!(
        output("刚刚买了一部 iPhone，好开心！", &options),
        "刚刚买了一部 iPhone，好开心！"
    );
}
